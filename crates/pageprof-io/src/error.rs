//! I/O error types
//!
//! One error type covering grid reading and artifact writing, so
//! callers handle a single enum.

use thiserror::Error;

/// Error type for grid I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Underlying read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Declared grid dimensions are not positive
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },

    /// Input ended before the expected number of values was read
    #[error("truncated input: expected {expected} values, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// A token was not a non-negative integer
    #[error("invalid token: {0:?}")]
    InvalidToken(String),

    /// Core data-structure error
    #[error("core error: {0}")]
    Core(#[from] pageprof_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
