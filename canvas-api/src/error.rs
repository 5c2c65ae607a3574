//! Errors returned by API calls.

use std::result;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// An error reported by the Canvas instance through a non-success status.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("bad request: {message}")]
    BadRequest { message: String },
    #[error("invalid access token: {message}")]
    InvalidAccessToken { message: String },
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },
    #[error("forbidden: {message}")]
    Forbidden { message: String },
    #[error("resource does not exist: {message}")]
    ResourceDoesNotExist { message: String },
    #[error("conflict: {message}")]
    Conflict { message: String },
    #[error("unexpected status {status}: {message}")]
    Other { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    List { errors: Vec<ErrorMessage> },
    Map { errors: Map<String, Value> },
    Message { message: String },
}

impl ErrorBody {
    fn into_message(self) -> String {
        match self {
            Self::List { errors } => errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; "),
            Self::Map { errors } => Value::Object(errors).to_string(),
            Self::Message { message } => message,
        }
    }
}

impl ApiError {
    /// Classifies an error response.
    ///
    /// `authenticate` tells whether the response carried a
    /// `WWW-Authenticate` header, which Canvas only sends for 401s caused by
    /// an invalid or expired token.
    pub(crate) fn from_response(status: StatusCode, authenticate: bool, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(body) => body.into_message(),
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body.to_string(),
        };
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest { message },
            StatusCode::UNAUTHORIZED if authenticate => Self::InvalidAccessToken { message },
            StatusCode::UNAUTHORIZED => Self::Unauthorized { message },
            StatusCode::FORBIDDEN => Self::Forbidden { message },
            StatusCode::NOT_FOUND => Self::ResourceDoesNotExist { message },
            StatusCode::CONFLICT => Self::Conflict { message },
            status => Self::Other { status, message },
        }
    }
}

#[derive(Error, Debug)]
pub enum RequestError {
    /// A create or update payload lacks a field Canvas requires.
    ///
    /// Raised before any request is sent.
    #[error("required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl RequestError {
    pub fn is_http(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(ApiError::ResourceDoesNotExist { .. }))
    }
}

pub type Result<T> = result::Result<T, RequestError>;
