//! Proc macros for canvas-api.

#![warn(rust_2018_idioms)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![deny(rustdoc::all)]

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, Type};

/// Implements `RequiredFields` for a payload struct.
///
/// Every field marked with `#[required]` has to be an `Option`. The generated
/// `missing_field` reports the first of them that is `None`, in declaration
/// order.
#[proc_macro_derive(RequiredFields, attributes(required))]
pub fn required_fields_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let required = named_fields(&input.data)
        .filter(|(_, attrs)| attrs.iter().any(|attr| attr.path.is_ident("required")))
        .map(|(ident, _)| ident)
        .collect::<Vec<_>>();
    let field_names = required.iter().map(ToString::to_string);
    let expanded = quote! {
        impl #impl_generics crate::params::RequiredFields for #name #ty_generics #where_clause {
            fn missing_field(&self) -> Option<&'static str> {
                #(
                    if Option::is_none(&self.#required) {
                        return Some(#field_names);
                    }
                )*
                None
            }
        }
    };
    proc_macro::TokenStream::from(expanded)
}

#[proc_macro_derive(DerefWrapper)]
pub fn deref_wrapper_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (ty, inner) = inner(&input.data);
    let inner_expr = inner_expr(inner);
    let expanded = quote! {
        impl std::ops::Deref for #name {
            type Target = #ty;

            fn deref(&self) -> &Self::Target {
                &self.#inner_expr
            }
        }
    };
    proc_macro::TokenStream::from(expanded)
}

#[proc_macro_derive(FromWrapper)]
pub fn from_wrapper_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (ty, inner) = inner(&input.data);
    let inner_expr = inner_expr(inner);
    let expanded = quote! {
        impl From<#ty> for #name {
            fn from(inner: #ty) -> Self {
                Self { #inner_expr: inner }
            }
        }

        impl From<#name> for #ty {
            fn from(wrapper: #name) -> Self {
                wrapper.#inner_expr
            }
        }
    };
    proc_macro::TokenStream::from(expanded)
}

fn named_fields(data: &Data) -> impl Iterator<Item = (&Ident, &Vec<syn::Attribute>)> {
    let fields = match *data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            Fields::Unnamed(_) | Fields::Unit => {
                unimplemented!("struct needs to have named fields")
            }
        },
        Data::Enum(_) | Data::Union(_) => unimplemented!("can only derive for structs"),
    };
    fields
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.attrs)))
}

fn inner(data: &Data) -> (&Type, &Option<Ident>) {
    let fields = match *data {
        Data::Struct(ref data) => match data.fields {
            Fields::Unnamed(ref fields) => &fields.unnamed,
            Fields::Named(ref fields) => &fields.named,
            Fields::Unit => unimplemented!("struct needs to have exactly one field"),
        },
        Data::Enum(_) | Data::Union(_) => unimplemented!("can only derive for structs"),
    };

    if fields.len() != 1 {
        unimplemented!("struct needs to have exactly one field");
    }
    let field = &fields.first().unwrap();
    (&field.ty, &field.ident)
}

fn inner_expr(inner: &Option<Ident>) -> proc_macro2::TokenStream {
    match inner {
        Some(ident) => quote! { #ident },
        None => quote! { 0 },
    }
}
