//! # Application Error Type
//!
//! Errors that can stop the dashboard from starting.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shelf                                  │
//! │                                                                         │
//! │  Startup (run)                    Runtime (BookStore)                   │
//! │  ─────────────                    ───────────────────                   │
//! │                                                                         │
//! │  shelf.toml unreadable ──┐        ClientError (any kind)                │
//! │  bad TOML ───────────────┤                 │                            │
//! │  invalid base_url ───────┼──► AppError     ▼                            │
//! │  client build fails ─────┘     (fatal)   Outcome::Failed(status msg)    │
//! │                                          (never fatal, shown as toast)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shelf_client::ClientError;
use thiserror::Error;

/// Result type alias for startup operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}
