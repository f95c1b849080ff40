//! Book CRUD routes. Paths are fixed by existing clients.

use crate::handlers::books::{create_book, delete_book, get_all_books, get_book, update_book};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/newbook", post(create_book))
        .route("/api/book", get(get_all_books))
        .route("/api/book/:id", get(get_book).put(update_book))
        .route("/api/deletebook/:id", delete(delete_book))
        .with_state(state)
}
