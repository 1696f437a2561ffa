//! Request validation
//!
//! Every check runs against the whole request and all violations are kept,
//! in declaration order. A [`MessagePolicy`] then picks the single message
//! shown to the client.

mod policy;
mod schema;

pub use policy::{FailureContext, MessagePolicy, Rule, STANDARD_RULES};
pub use schema::{current_year, validate_book, validate_book_id, validate_filter, BOOK_FIELDS};

use serde::Serialize;

/// What went wrong with a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    NotString,
    Empty,
    NotNumber,
    NotInteger,
    NotBoolean,
    Min { limit: i64 },
    Max { limit: i64 },
    NotOneOf,
    ExceedsRef { reference: String },
    NotAllowed,
    NotObject,
    MalformedJson,
}

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Offending key, `None` when the request as a whole is at fault
    pub field: Option<String>,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    fn on(field: &str, kind: ViolationKind, message: String) -> Self {
        Self {
            field: Some(field.to_string()),
            kind,
            message,
        }
    }

    pub fn required(field: &str) -> Self {
        Self::on(field, ViolationKind::Required, format!("\"{field}\" is required"))
    }

    pub fn not_string(field: &str) -> Self {
        Self::on(field, ViolationKind::NotString, format!("\"{field}\" must be a string"))
    }

    pub fn empty(field: &str) -> Self {
        Self::on(
            field,
            ViolationKind::Empty,
            format!("\"{field}\" is not allowed to be empty"),
        )
    }

    pub fn not_number(field: &str) -> Self {
        Self::on(field, ViolationKind::NotNumber, format!("\"{field}\" must be a number"))
    }

    pub fn not_integer(field: &str) -> Self {
        Self::on(
            field,
            ViolationKind::NotInteger,
            format!("\"{field}\" must be an integer"),
        )
    }

    pub fn not_boolean(field: &str) -> Self {
        Self::on(field, ViolationKind::NotBoolean, format!("\"{field}\" must be a boolean"))
    }

    pub fn min(field: &str, limit: i64) -> Self {
        Self::on(
            field,
            ViolationKind::Min { limit },
            format!("\"{field}\" must be greater than or equal to {limit}"),
        )
    }

    pub fn max(field: &str, limit: i64) -> Self {
        Self::on(
            field,
            ViolationKind::Max { limit },
            format!("\"{field}\" must be less than or equal to {limit}"),
        )
    }

    pub fn not_one_of(field: &str, allowed: &[&str]) -> Self {
        Self::on(
            field,
            ViolationKind::NotOneOf,
            format!("\"{field}\" must be one of [{}]", allowed.join(", ")),
        )
    }

    pub fn exceeds(field: &str, reference: &str) -> Self {
        Self::on(
            field,
            ViolationKind::ExceedsRef {
                reference: reference.to_string(),
            },
            format!("\"{field}\" must be less than or equal to ref:{reference}"),
        )
    }

    pub fn not_allowed(field: &str) -> Self {
        Self::on(field, ViolationKind::NotAllowed, format!("\"{field}\" is not allowed"))
    }

    pub fn not_object() -> Self {
        Self {
            field: None,
            kind: ViolationKind::NotObject,
            message: "\"value\" must be of type object".to_string(),
        }
    }

    pub fn malformed_json() -> Self {
        Self {
            field: None,
            kind: ViolationKind::MalformedJson,
            message: "Invalid request payload JSON format".to_string(),
        }
    }
}
