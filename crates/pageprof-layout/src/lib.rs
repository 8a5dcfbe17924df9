//! pageprof-layout - Layout analysis over projection profiles
//!
//! This crate provides the analysis stages on top of the core data
//! structures:
//!
//! - **Reading-direction classification** - dominant text-flow axis
//!   from run counts in the closed profiles
//! - **Text-line extraction** - line bounding boxes from profile runs,
//!   tightened against the grid
//! - **Staged pipeline** - [`analyze`] threading every artifact through
//!   an explicit [`LayoutAnalysis`] context

pub mod analysis;
pub mod direction;
pub mod error;
pub mod textline;

pub use analysis::{LayoutAnalysis, analyze};
pub use direction::{DIRECTION_RUN_FACTOR, ReadingDirection, classify};
pub use error::{LayoutError, LayoutResult};
pub use textline::find_line_boxes;
