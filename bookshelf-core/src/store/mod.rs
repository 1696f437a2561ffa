//! Book collection abstraction
//!
//! Handlers only ever talk to a [`BookStore`]. Ids, timestamps and the
//! not-found decision all live behind this trait.

use crate::error::StoreError;
use crate::types::{Book, BookFilter, NewBook};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A collection of book records
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new book, assigning its id and timestamps
    async fn add(&self, book: NewBook) -> StoreResult<Book>;

    /// Books matching the filter, in insertion order
    async fn list(&self, filter: &BookFilter) -> StoreResult<Vec<Book>>;

    /// Look up a book by id
    async fn get(&self, id: &str) -> StoreResult<Option<Book>>;

    /// Replace every field but the id and insertion time
    ///
    /// Fails with [`StoreError::NotFound`] when no book has this id.
    async fn replace(&self, id: &str, book: NewBook) -> StoreResult<Book>;

    /// Remove a book, returning the removed record
    ///
    /// Fails with [`StoreError::NotFound`] when no book has this id.
    async fn remove(&self, id: &str) -> StoreResult<Book>;
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn add(&self, book: NewBook) -> StoreResult<Book> {
        let book = Book::from_new(Uuid::new_v4().to_string(), book);
        self.books.write().await.push(book.clone());
        tracing::debug!(id = %book.id, "book stored");
        Ok(book)
    }

    async fn list(&self, filter: &BookFilter) -> StoreResult<Vec<Book>> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Book>> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned())
    }

    async fn replace(&self, id: &str, book: NewBook) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        let existing = books
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        existing.apply(book);
        Ok(existing.clone())
    }

    async fn remove(&self, id: &str) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(books.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(name: &str, page_count: u32, read_page: u32, reading: bool) -> NewBook {
        NewBook {
            name: name.to_string(),
            year: 2010,
            author: "Author".to_string(),
            summary: "Summary".to_string(),
            publisher: "Publisher".to_string(),
            page_count,
            read_page,
            reading,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.add(new_book("A", 10, 0, false)).await.unwrap();
        let b = store.add(new_book("B", 10, 0, false)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_roundtrip_and_missing() {
        let store = MemoryStore::new();
        let added = store.add(new_book("A", 10, 10, true)).await.unwrap();
        let fetched = store.get(&added.id).await.unwrap().unwrap();
        assert_eq!(fetched, added);
        assert!(fetched.finished);
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_and_filters() {
        let store = MemoryStore::new();
        store.add(new_book("Dune", 10, 10, false)).await.unwrap();
        store.add(new_book("Emma", 10, 3, true)).await.unwrap();
        store.add(new_book("Dune Messiah", 10, 0, true)).await.unwrap();

        let all = store.list(&BookFilter::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Dune", "Emma", "Dune Messiah"]);

        let filter = BookFilter {
            name: Some("DUNE".to_string()),
            reading: Some(true),
            ..Default::default()
        };
        let found = store.list(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Dune Messiah");

        let finished = BookFilter {
            finished: Some(true),
            ..Default::default()
        };
        assert_eq!(store.list(&finished).await.unwrap()[0].name, "Dune");
    }

    #[tokio::test]
    async fn test_replace() {
        let store = MemoryStore::new();
        let added = store.add(new_book("A", 10, 0, false)).await.unwrap();
        let replaced = store
            .replace(&added.id, new_book("B", 20, 20, true))
            .await
            .unwrap();
        assert_eq!(replaced.id, added.id);
        assert_eq!(replaced.inserted_at, added.inserted_at);
        assert_eq!(replaced.name, "B");
        assert!(replaced.finished);

        let err = store
            .replace("missing", new_book("C", 1, 0, false))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();
        let added = store.add(new_book("A", 10, 0, false)).await.unwrap();
        let removed = store.remove(&added.id).await.unwrap();
        assert_eq!(removed.id, added.id);
        assert!(store.is_empty().await);
        assert!(matches!(
            store.remove(&added.id).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
