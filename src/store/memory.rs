//! In-process store for tests and database-less local runs.

use super::BookStore;
use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Rows {
    last_id: i64,
    books: BTreeMap<i64, Book>,
}

/// Ids start at 1 and are never reused, like a serial column.
#[derive(Default)]
pub struct MemoryBookStore {
    rows: Mutex<Rows>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.rows().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, book: &Book) -> Result<i64, AppError> {
        let mut rows = self.rows();
        rows.last_id += 1;
        let id = rows.last_id;
        rows.books.insert(id, book.clone().with_id(id));
        Ok(id)
    }

    async fn find(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.rows().books.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.rows().books.values().cloned().collect())
    }

    async fn update(&self, id: i64, book: &Book) -> Result<u64, AppError> {
        let mut rows = self.rows();
        match rows.books.get_mut(&id) {
            Some(existing) => {
                *existing = book.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        Ok(self.rows().books.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
