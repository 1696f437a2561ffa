//! API errors and their HTTP mapping

use crate::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookshelf_core::{FailureContext, MessagePolicy, ValidationError};
use thiserror::Error;

/// Errors a handler can end with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected before reaching the store
    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Reduce a set of violations to the one message the client sees
    pub fn validation(context: FailureContext, err: &ValidationError) -> Self {
        let message = MessagePolicy::default().select(context, err);
        tracing::debug!(
            violations = err.violations.len(),
            message = %message,
            "request failed validation"
        );
        Self::Validation { message }
    }

    /// Rejected for a reason no schema describes (e.g. an unreadable body)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Validation { message } | Self::NotFound { message } => ApiResponse::fail(message),
            Self::Internal { message } => ApiResponse::error(message),
        };
        (status, Json(body)).into_response()
    }
}
