//! Book handlers: create, get one, get all, update, delete.
//!
//! Rating rejections are ordinary 200 responses; only bad input or store failures become errors.

use crate::error::AppError;
use crate::extractors::{BookId, BookPayload};
use crate::model::Book;
use crate::response::{self, MessageBody};
use crate::service::BookService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /api/newbook
pub async fn create_book(
    State(state): State<AppState>,
    BookPayload(book): BookPayload,
) -> Result<Json<MessageBody>, AppError> {
    let outcome = BookService::create(state.store.as_ref(), &book).await?;
    Ok(Json(response::created(outcome)))
}

/// GET /api/book/:id — zero-valued book when absent.
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<Book>, AppError> {
    let book = BookService::get(state.store.as_ref(), id).await?;
    Ok(Json(book))
}

/// GET /api/book
pub async fn get_all_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = BookService::list(state.store.as_ref()).await?;
    Ok(Json(books))
}

/// PUT /api/book/:id
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    BookPayload(book): BookPayload,
) -> Result<Json<MessageBody>, AppError> {
    let outcome = BookService::update(state.store.as_ref(), id, &book).await?;
    Ok(Json(response::updated(id, outcome)))
}

/// DELETE /api/deletebook/:id
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<MessageBody>, AppError> {
    let rows = BookService::delete(state.store.as_ref(), id).await?;
    Ok(Json(response::deleted(id, rows)))
}
