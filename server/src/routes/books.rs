//! Book catalog routes.
//!
//! Each handler extracts the wire parameters, calls one store operation
//! under the state lock, and wraps the outcome in the response envelope.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::response::{BookDetail, BookListing, CreatedBook, Envelope};
use crate::AppState;
use bookshelf_engine::{BookDraft, BookFilter, BookId};

/// Create book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route(
            "/books/{bookId}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// POST /books - Add a book to the catalog.
async fn add_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> Result<(StatusCode, Json<Envelope<CreatedBook>>)> {
    let mut store = state.store.lock().await;
    let book_id = store
        .create(draft)
        .map_err(|e| AppError::from_store("add", e))?;

    tracing::debug!("added book {book_id}");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            "Book added successfully",
            CreatedBook { book_id },
        )),
    ))
}

/// GET /books - List books, optionally filtered.
async fn list_books(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>,
) -> Json<Envelope<BookListing>> {
    let store = state.store.lock().await;
    let books = store.list(&filter);
    Json(Envelope::data(BookListing { books }))
}

/// GET /books/{bookId} - Fetch one book with all fields.
async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<Json<Envelope<BookDetail>>> {
    let store = state.store.lock().await;
    let book = store
        .get(&book_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

    Ok(Json(Envelope::data(BookDetail { book })))
}

/// PUT /books/{bookId} - Replace a book's fields.
async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Envelope>> {
    let mut store = state.store.lock().await;
    store
        .update(&book_id, draft)
        .map_err(|e| AppError::from_store("update", e))?;

    Ok(Json(Envelope::message("Book updated successfully")))
}

/// DELETE /books/{bookId} - Remove a book.
async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<Json<Envelope>> {
    let mut store = state.store.lock().await;
    store
        .delete(&book_id)
        .map_err(|e| AppError::from_store("delete", e))?;

    Ok(Json(Envelope::message("Book deleted successfully")))
}
