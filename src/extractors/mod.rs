//! Request extractors that reject with `AppError`, so bad input gets the JSON error body.

mod book;
pub use book::{BookId, BookPayload};
