//! Error types for Bookshelf Core

use crate::validation::Violation;
use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// A request failed its declared schema
///
/// Holds every violation found, in declaration order. Choosing which one to
/// surface is left to [`crate::validation::MessagePolicy`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let first = self.first().map(|v| v.message.as_str()).unwrap_or("none");
        write!(f, "{} violation(s), first: {}", self.violations.len(), first)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Single-violation error for failures that happen before schema checks
    /// (e.g. an unparseable body)
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Whether any violation concerns the given field
    pub fn touches(&self, field: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.field.as_deref() == Some(field))
    }

    /// The first declared violation
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }
}

/// Errors raised by a book collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),
}
