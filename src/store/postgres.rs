//! PostgreSQL-backed store. Every operation opens its own connection and closes it before returning.

use super::BookStore;
use crate::error::{AppError, ConfigError};
use crate::model::Book;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{ConnectOptions, Connection, PgConnection, Row};
use std::str::FromStr;

const BOOK_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS book (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        publisher TEXT NOT NULL,
        publish_date TIMESTAMPTZ,
        rating DOUBLE PRECISION NOT NULL,
        status BOOLEAN NOT NULL
    )
"#;

const INSERT_BOOK: &str = "INSERT INTO book (title, author, publisher, publish_date, rating, status) \
     VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";
const SELECT_BOOK: &str =
    "SELECT id, title, author, publisher, publish_date, rating, status FROM book WHERE id = $1";
const SELECT_BOOKS: &str =
    "SELECT id, title, author, publisher, publish_date, rating, status FROM book ORDER BY id";
const UPDATE_BOOK: &str = "UPDATE book SET title = $2, author = $3, publisher = $4, \
     publish_date = $5, rating = $6, status = $7 WHERE id = $1";
const DELETE_BOOK: &str = "DELETE FROM book WHERE id = $1";

pub struct PgBookStore {
    options: PgConnectOptions,
}

impl PgBookStore {
    /// Parses the connection string up front; no connection is opened here.
    pub fn new(database_url: &str) -> Result<Self, AppError> {
        let options = PgConnectOptions::from_str(database_url)
            .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
        Ok(Self { options })
    }

    async fn connect(&self) -> Result<PgConnection, AppError> {
        Ok(self.options.connect().await?)
    }

    async fn release(conn: PgConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "closing database connection failed");
        }
    }

    /// Remove every row and restart the id sequence at 1.
    pub async fn reset(&self) -> Result<(), AppError> {
        let sql = "TRUNCATE book RESTART IDENTITY";
        tracing::debug!(sql = %sql, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query(sql).execute(&mut conn).await;
        Self::release(conn).await;
        result?;
        Ok(())
    }
}

/// Create the `book` table if it does not exist yet. Safe to call on every start.
pub async fn ensure_book_table(store: &PgBookStore) -> Result<(), AppError> {
    let mut conn = store.connect().await?;
    let result = sqlx::query(BOOK_TABLE_DDL).execute(&mut conn).await;
    PgBookStore::release(conn).await;
    result?;
    Ok(())
}

fn book_from_row(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        publisher: row.try_get("publisher")?,
        publish_date: row.try_get::<Option<DateTime<Utc>>, _>("publish_date")?,
        rating: row.try_get("rating")?,
        status: row.try_get("status")?,
    })
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, book: &Book) -> Result<i64, AppError> {
        tracing::debug!(sql = %INSERT_BOOK, title = %book.title, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query_scalar::<_, i64>(INSERT_BOOK)
            .bind(book.title.as_str())
            .bind(book.author.as_str())
            .bind(book.publisher.as_str())
            .bind(book.publish_date)
            .bind(book.rating)
            .bind(book.status)
            .fetch_one(&mut conn)
            .await;
        Self::release(conn).await;
        Ok(result?)
    }

    async fn find(&self, id: i64) -> Result<Option<Book>, AppError> {
        tracing::debug!(sql = %SELECT_BOOK, id, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query(SELECT_BOOK)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        Self::release(conn).await;
        let row = result?;
        Ok(row.as_ref().map(book_from_row).transpose()?)
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %SELECT_BOOKS, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query(SELECT_BOOKS).fetch_all(&mut conn).await;
        Self::release(conn).await;
        let rows = result?;
        Ok(rows.iter().map(book_from_row).collect::<Result<Vec<_>, _>>()?)
    }

    async fn update(&self, id: i64, book: &Book) -> Result<u64, AppError> {
        tracing::debug!(sql = %UPDATE_BOOK, id, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query(UPDATE_BOOK)
            .bind(id)
            .bind(book.title.as_str())
            .bind(book.author.as_str())
            .bind(book.publisher.as_str())
            .bind(book.publish_date)
            .bind(book.rating)
            .bind(book.status)
            .execute(&mut conn)
            .await;
        Self::release(conn).await;
        Ok(result?.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE_BOOK, id, "query");
        let mut conn = self.connect().await?;
        let result = sqlx::query(DELETE_BOOK).bind(id).execute(&mut conn).await;
        Self::release(conn).await;
        Ok(result?.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").fetch_optional(&mut conn).await;
        Self::release(conn).await;
        result?;
        Ok(())
    }
}
