//! Core types for the book collection

mod book;
mod filter;

pub use book::{Book, BookSummary, NewBook};
pub use filter::BookFilter;
