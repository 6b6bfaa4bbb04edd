//! Shared error type.
//!
//! Sub-crates define their own error enums; this one covers configuration
//! and the parsing helpers that live in `pd-core`.

use thiserror::Error;

/// The top-level error type for `pd-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `pd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
