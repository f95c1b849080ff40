//! Book persistence. Handlers only see the `BookStore` trait; the backend is chosen at startup.

mod memory;
mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::{ensure_book_table, PgBookStore};

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new row and return the generated id. `book.id` is ignored.
    async fn insert(&self, book: &Book) -> Result<i64, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// All rows in id order.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Replace every column except the id. Returns rows affected (0 when absent).
    async fn update(&self, id: i64, book: &Book) -> Result<u64, AppError>;

    /// Returns rows affected (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Round-trip to the backend; used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
