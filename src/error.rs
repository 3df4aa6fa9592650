//! Error types for the employee gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Client Error Enum ==
/// Failures talking to the upstream employee service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Single 429 response; the retry policy decides whether to try again
    #[error("Upstream rate limited the request")]
    TooManyRequests,

    /// Retry budget spent while the upstream kept answering 429
    #[error("Upstream still rate limiting after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Any other non-2xx status
    #[error("Upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Connection, timeout or body read failure
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not a valid envelope
    #[error("Malformed upstream response: {0}")]
    Decode(String),

    /// Envelope carried an error status
    #[error("Upstream reported an error: {0}")]
    Envelope(String),
}

impl ClientError {
    /// True when the failure is a rate-limit response worth retrying.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ClientError::TooManyRequests)
    }
}

// == Api Error Enum ==
/// Errors surfaced by the service layer and mapped onto HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad search string or create payload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown employee
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream call failed, after retries where they apply
    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Body of every 500; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Upstream(_) | ApiError::Unexpected(_) => {
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service and handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Result type for upstream client calls.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
