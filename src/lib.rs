//! Book API: JSON CRUD over a single PostgreSQL `book` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::Book;
pub use response::MessageBody;
pub use routes::{book_routes, build_router, common_routes};
pub use service::{BookService, CreateOutcome, UpdateOutcome};
pub use state::AppState;
pub use store::{ensure_book_table, BookStore, MemoryBookStore, PgBookStore};
