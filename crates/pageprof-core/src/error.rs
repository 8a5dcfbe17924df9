//! Error types for pageprof-core
//!
//! A single error enum shared by the core data structures. Each variant
//! carries enough context to diagnose the failing call without exposing
//! buffer internals.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Grid dimensions must both be at least 1
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: u32, cols: u32 },

    /// Cell coordinates outside the writable interior
    #[error("cell out of bounds: ({row}, {col}) not in [1,{rows}]x[1,{cols}]")]
    CellOutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    /// Box bounds out of order or outside the 1-indexed coordinate space
    #[error("invalid box bounds: ({min_row},{min_col})-({max_row},{max_col})")]
    InvalidBox {
        min_row: u32,
        min_col: u32,
        max_row: u32,
        max_col: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
