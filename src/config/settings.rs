//! Typed settings read once at startup.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/books";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
    /// Create the `book` table at startup when it is missing.
    pub ensure_schema: bool,
    pub store: StoreKind,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            ensure_schema: true,
            store: StoreKind::Postgres,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("POSTGRES_URL")
            .or_else(|| get("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            reason: format!("'{}': {}", bind_raw, e),
        })?;

        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BODY_LIMIT_BYTES",
                        reason: format!("'{}' is not a positive integer", raw),
                    })
                }
            },
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let ensure_schema = match get("ENSURE_SCHEMA") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                key: "ENSURE_SCHEMA",
                reason: format!("'{}' is not a boolean", raw),
            })?,
            None => true,
        };

        let store = match get("BOOK_STORE").map(|s| s.to_lowercase()).as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "BOOK_STORE",
                    reason: format!("'{}' (expected postgres or memory)", other),
                })
            }
        };

        Ok(Settings {
            database_url,
            bind_addr,
            body_limit_bytes,
            ensure_schema,
            store,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
