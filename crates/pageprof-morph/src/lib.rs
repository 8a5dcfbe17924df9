//! pageprof-morph - 1D morphology for projection profiles
//!
//! Gap closing for binarized projection profiles:
//!
//! - [`LineSel`] / [`GAP_SEL`] - the fixed three-slot structuring
//!   element with center origin
//! - [`close`] - dilation-then-erosion over a `BinaryProfile`
//!
//! The dilation and erosion passes share a padded working buffer, so
//! closing is exposed as one operation rather than two composable
//! halves.

pub mod closing;
pub mod sel;

pub use closing::close;
pub use sel::{GAP_SEL, LineSel};
