//! Error types for pageprof-layout

use thiserror::Error;

/// Errors from the layout-analysis stages
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Core data-structure error
    #[error("core error: {0}")]
    Core(#[from] pageprof_core::Error),

    /// Closed profile length does not match the scanned grid axis
    #[error("profile length mismatch: expected {expected}, got {actual}")]
    ProfileLength { expected: usize, actual: usize },
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
