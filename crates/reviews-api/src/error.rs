use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use reviews_types::api::ErrorResponse;

pub const FIELDS_REQUIRED: &str = "Name and review are required";
pub const FIELDS_EMPTY: &str = "Name and review cannot be empty";
pub const SUBMIT_FAILED: &str = "Failed to submit review";
pub const FETCH_FAILED: &str = "Failed to fetch reviews";
pub const DELETE_FAILED: &str = "Failed to delete review";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Invalid request body")]
    MalformedRequest,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Invalid review id")]
    InvalidId,

    #[error("Unauthorized")]
    Unauthorized,

    /// The message is what the client sees; `source` only reaches the log.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ApiError {
    pub fn storage(message: &'static str, source: impl Into<BoxError>) -> Self {
        ApiError::Storage {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::MalformedRequest | ApiError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Storage { message, source } => {
                error!("{}: {}", message, source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
