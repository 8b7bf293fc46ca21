//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::FulfillmentError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed body or values outside their valid range
    InvalidInput(String),
    /// Selection or planning over an empty candidate set
    NoCandidates,
    /// A requested candidate id is not part of the network
    NotFound(String),
}

impl From<FulfillmentError> for AppError {
    fn from(err: FulfillmentError) -> Self {
        match err {
            FulfillmentError::InvalidInput(msg) => AppError::InvalidInput(msg),
            FulfillmentError::NoCandidates => AppError::NoCandidates,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        FulfillmentError::from(errors).into()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, ApiError::new("INVALID_INPUT", msg)),
            AppError::NoCandidates => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("NO_CANDIDATES", FulfillmentError::NoCandidates.to_string()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
        };
        tracing::debug!(code = %error.code, message = %error.message, "request rejected");
        (status, Json(error)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
