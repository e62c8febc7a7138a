//! Error types for the relay server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Relay Error Enum ==
/// Unified error type for the relay server.
///
/// The `Display` text of each variant is exactly the message sent to clients.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RelayError {
    /// Request body had no usable `url` field
    #[error("URL is required.")]
    UrlRequired,

    /// `url` did not parse as an absolute URL
    #[error("Invalid URL format.")]
    InvalidUrl,

    /// No live entry for the derived identity
    #[error("URL not found for this user.")]
    NotFound,
}

impl RelayError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UrlRequired | RelayError::InvalidUrl => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the relay server.
pub type Result<T> = std::result::Result<T, RelayError>;
