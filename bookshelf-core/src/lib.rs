//! Bookshelf Core Library
//!
//! Domain types, request validation and the book collection abstraction for
//! the Bookshelf service. Validation produces either a typed request or a
//! [`ValidationError`] holding every violation; a [`MessagePolicy`] reduces
//! that to the one message a client sees.

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{BookshelfError, Result, StoreError, ValidationError};
pub use store::{BookStore, MemoryStore, StoreResult};
pub use types::{Book, BookFilter, BookSummary, NewBook};
pub use validation::{FailureContext, MessagePolicy, Violation, ViolationKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err: BookshelfError = StoreError::NotFound("abc".to_string()).into();
        assert_eq!(err.to_string(), "Storage error: Book not found: abc");

        let err: BookshelfError =
            ValidationError::single(Violation::required("name")).into();
        assert_eq!(
            err.to_string(),
            "Validation error: 1 violation(s), first: \"name\" is required"
        );
    }
}
