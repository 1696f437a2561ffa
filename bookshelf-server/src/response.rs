//! JSON response envelope
//!
//! Every body has the shape `{ "status": ..., "message"?: ..., "data"?: ... }`.

use serde::Serialize;

/// Outcome reported in the `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// The client is at fault (validation, unknown id)
    Fail,
    /// The server is at fault
    Error,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_status(Status::Success, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(Status::Fail, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(Status::Error, message)
    }

    fn with_status(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}
