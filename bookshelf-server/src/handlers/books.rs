//! Book collection handlers
//!
//! Validation has already happened in the extractors; these only talk to the
//! store and shape the response.

use crate::error::ApiError;
use crate::extract::{BookId, ValidBook, ValidFilter};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use bookshelf_core::{Book, BookSummary, StoreError};
use serde::Serialize;

/// Data returned after a successful create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

/// List response
#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// Single book response
#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub book: Book,
}

fn store_failure(err: StoreError, not_found: &str) -> ApiError {
    match err {
        StoreError::NotFound(id) => {
            tracing::debug!(id = %id, "book not found");
            ApiError::not_found(not_found)
        }
        StoreError::Backend(message) => {
            tracing::error!("Book store failure: {}", message);
            ApiError::internal("Terjadi kegagalan pada server")
        }
    }
}

/// `POST /books`
pub async fn add_book(
    State(state): State<AppState>,
    ValidBook(book): ValidBook,
) -> Result<(StatusCode, Json<ApiResponse<CreatedBook>>), ApiError> {
    let book = state.store.add(book).await.map_err(|e| {
        tracing::error!("Failed to add book: {}", e);
        ApiError::internal("Buku gagal ditambahkan")
    })?;

    tracing::info!(id = %book.id, name = %book.name, "book added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with(
            "Buku berhasil ditambahkan",
            CreatedBook { book_id: book.id },
        )),
    ))
}

/// `GET /books`
pub async fn list_books(
    State(state): State<AppState>,
    ValidFilter(filter): ValidFilter,
) -> Result<Json<ApiResponse<BookList>>, ApiError> {
    let books = state
        .store
        .list(&filter)
        .await
        .map_err(|e| store_failure(e, "Buku tidak ditemukan"))?;

    Ok(Json(ApiResponse::success(BookList {
        books: books.iter().map(BookSummary::from).collect(),
    })))
}

/// `GET /books/{id}`
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<ApiResponse<BookDetail>>, ApiError> {
    let book = state
        .store
        .get(&id)
        .await
        .map_err(|e| store_failure(e, "Buku tidak ditemukan"))?
        .ok_or_else(|| ApiError::not_found("Buku tidak ditemukan"))?;

    Ok(Json(ApiResponse::success(BookDetail { book })))
}

/// `PUT /books/{id}`
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    ValidBook(book): ValidBook,
) -> Result<Json<ApiResponse>, ApiError> {
    let book = state
        .store
        .replace(&id, book)
        .await
        .map_err(|e| store_failure(e, "Gagal memperbarui buku. Id tidak ditemukan"))?;

    tracing::info!(id = %book.id, "book updated");

    Ok(Json(ApiResponse::message("Buku berhasil diperbarui")))
}

/// `DELETE /books/{id}`
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<ApiResponse>, ApiError> {
    let book = state
        .store
        .remove(&id)
        .await
        .map_err(|e| store_failure(e, "Buku gagal dihapus. Id tidak ditemukan"))?;

    tracing::info!(id = %book.id, "book deleted");

    Ok(Json(ApiResponse::message("Buku berhasil dihapus")))
}
