//! Request-scoped narrowing criteria for listing books

use super::Book;
use serde::{Deserialize, Serialize};

/// Filter applied to the list operation
///
/// Every present criterion must match. Built by
/// [`crate::validation::validate_filter`] from the raw query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFilter {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,

    /// Match on the `reading` flag
    pub reading: Option<bool>,

    /// Match on the derived `finished` flag
    pub finished: Option<bool>,
}

impl BookFilter {
    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.reading.is_none() && self.finished.is_none()
    }

    /// Check a book against every present criterion
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref name) = self.name {
            if !book.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }
        true
    }
}
