//! Canvas LMS REST API wrapper.

#![warn(rust_2018_idioms)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::semicolon_if_nothing_returned)]

pub mod canvas;
pub mod course;
pub mod error;
pub mod pagination;
pub mod params;
pub mod requester;
pub mod resource;
pub mod response;
mod serde;
pub mod token;

pub use canvas::Canvas;
pub use error::{ApiError, RequestError, Result};
pub use pagination::PaginatedList;
pub use token::AccessToken;
