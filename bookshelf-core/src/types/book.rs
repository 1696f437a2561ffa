//! The Book record and its payload form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated book payload, as accepted by create and update
///
/// Produced only by [`crate::validation::validate_book`], so every instance
/// satisfies the schema (non-empty strings, year range, `read_page <= page_count`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl NewBook {
    /// A book is finished once every page has been read
    pub fn is_finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, assigned by the store
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    /// Derived: `page_count == read_page`
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Create a fresh record from a validated payload
    pub fn from_new(id: String, new: NewBook) -> Self {
        let now = Utc::now();
        let finished = new.is_finished();
        Self {
            id,
            name: new.name,
            year: new.year,
            author: new.author,
            summary: new.summary,
            publisher: new.publisher,
            page_count: new.page_count,
            read_page: new.read_page,
            finished,
            reading: new.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every field except `id` and `inserted_at`
    pub fn apply(&mut self, new: NewBook) {
        self.finished = new.is_finished();
        self.name = new.name;
        self.year = new.year;
        self.author = new.author;
        self.summary = new.summary;
        self.publisher = new.publisher;
        self.page_count = new.page_count;
        self.read_page = new.read_page;
        self.reading = new.reading;
        self.updated_at = Utc::now();
    }
}

/// Book summary for list responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}
