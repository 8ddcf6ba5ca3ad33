//! Configuration error type shared by the `duel-*` crates.
//!
//! Sub-crates define their own error enums and wrap `DuelError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DuelError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Shorthand result type for configuration checks.
pub type DuelResult<T> = Result<T, DuelError>;
