//! Application state

use bookshelf_core::{BookStore, MemoryStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The book collection every handler delegates to
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    /// State backed by a fresh in-memory collection
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// State backed by the given collection
    pub fn with_store(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
