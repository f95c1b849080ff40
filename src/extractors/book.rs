//! Path id and JSON body extractors for book routes.

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};

/// Numeric id from the last path segment (`/api/book/:id`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", raw)))?;
        Ok(BookId(id))
    }
}

/// A `Book` decoded from a JSON body.
#[derive(Debug)]
pub struct BookPayload(pub Book);

#[async_trait]
impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(book) = Json::<Book>::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
                _ => AppError::BadRequest(e.body_text()),
            })?;
        Ok(BookPayload(book))
    }
}
