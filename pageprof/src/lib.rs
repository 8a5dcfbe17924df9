//! Pageprof - projection-profile layout analysis
//!
//! Pageprof analyzes a binarized document-image grid: it derives
//! horizontal and vertical projection profiles, thresholds them, closes
//! small gaps with a one-dimensional morphological closing, infers the
//! reading direction from run counts, and extracts bounding boxes for
//! the detected text lines.
//!
//! # Example
//!
//! ```
//! use pageprof::{Grid, layout};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! for col in 1..=3 {
//!     grid.set(2, col, 1).unwrap();
//! }
//!
//! let analysis = layout::analyze(&grid, 1, layout::DIRECTION_RUN_FACTOR).unwrap();
//! assert_eq!(analysis.direction, layout::ReadingDirection::Vertical);
//! assert_eq!(analysis.boxes.len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pageprof_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pageprof_io as io;
pub use pageprof_layout as layout;
pub use pageprof_morph as morph;
