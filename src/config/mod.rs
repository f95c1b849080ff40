//! Process configuration from environment variables (and `.env`).

mod settings;

pub use settings::{Settings, StoreKind};
