//! pageprof-core - Data structures for projection-profile layout analysis
//!
//! This crate provides the fundamental types used throughout pageprof:
//!
//! - [`Grid`] - padded document-image buffer with 1-indexed access
//! - [`Profile`] / [`BinaryProfile`] - projection profiles and their
//!   thresholded form
//! - [`LayoutBox`] / [`BoxKind`] / [`BoxList`] - detected region boxes
//!
//! plus the operations that belong to the data: projection, profile
//! thresholding, run counting, and box outline rendering.

pub mod boxes;
mod draw;
pub mod error;
pub mod grid;
pub mod profile;

pub use boxes::{BoxKind, BoxList, LayoutBox};
pub use error::{Error, Result};
pub use grid::Grid;
pub use profile::{BinaryProfile, Profile, projection_profiles, threshold};
