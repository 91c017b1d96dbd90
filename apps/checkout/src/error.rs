//! # App Error Type
//!
//! Errors for the checkout host. None of these come from user input on the
//! page: field problems are validation verdicts and end up as inline
//! feedback. `AppError` covers startup and terminal I/O only.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Checkout App                       │
//! │                                                                         │
//! │  checkout.toml unreadable ─────► ConfigLoadFailed ──┐                   │
//! │  bad values (price, ids) ──────► InvalidConfig ─────┤                   │
//! │  CoreError (zero duration) ────► Core ──────────────┼──► run() fails   │
//! │  stdin / runtime failure ──────► Io ────────────────┘    exit code 1   │
//! │                                                                         │
//! │  unparseable terminal line ────► UnknownCommand ──► logged, skipped    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use booth_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config parsed but describes an unusable page.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Domain value rejected by booth-core.
    #[error("Invalid configuration: {0}")]
    Core(#[from] CoreError),

    /// Terminal line that is not a page event.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
