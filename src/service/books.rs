//! Book operations over any `BookStore`.

use super::validation::{check_rating, RatingRejected};
use crate::error::AppError;
use crate::model::Book;
use crate::store::BookStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CreateOutcome {
    Created(i64),
    Rejected(RatingRejected),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    /// Rows affected; 0 when no book has the id.
    Updated(u64),
    Rejected(RatingRejected),
}

pub struct BookService;

impl BookService {
    /// Insert one book if its rating is in range. The id in `book` is ignored.
    pub async fn create(store: &dyn BookStore, book: &Book) -> Result<CreateOutcome, AppError> {
        if let Err(rejected) = check_rating(book.rating) {
            tracing::warn!(rating = book.rating, "create rejected: rating out of range");
            return Ok(CreateOutcome::Rejected(rejected));
        }
        let id = store.insert(book).await?;
        tracing::info!(id, "inserted a single record");
        Ok(CreateOutcome::Created(id))
    }

    /// Missing rows come back as `Book::default()`, not as an error.
    pub async fn get(store: &dyn BookStore, id: i64) -> Result<Book, AppError> {
        let book = store.find(id).await?;
        if book.is_none() {
            tracing::debug!(id, "no rows were returned");
        }
        Ok(book.unwrap_or_default())
    }

    pub async fn list(store: &dyn BookStore) -> Result<Vec<Book>, AppError> {
        store.list().await
    }

    /// The rating check runs first, so a rejection is reported whether or not the id exists.
    pub async fn update(
        store: &dyn BookStore,
        id: i64,
        book: &Book,
    ) -> Result<UpdateOutcome, AppError> {
        if let Err(rejected) = check_rating(book.rating) {
            tracing::warn!(id, rating = book.rating, "update rejected: rating out of range");
            return Ok(UpdateOutcome::Rejected(rejected));
        }
        let rows = store.update(id, book).await?;
        tracing::info!(id, rows_affected = rows, "book updated");
        Ok(UpdateOutcome::Updated(rows))
    }

    pub async fn delete(store: &dyn BookStore, id: i64) -> Result<u64, AppError> {
        let rows = store.delete(id).await?;
        tracing::info!(id, rows_affected = rows, "book deleted");
        Ok(rows)
    }
}
