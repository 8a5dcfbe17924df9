//! pageprof-io - Grid text I/O for pageprof
//!
//! Reading the whitespace grid format and rendering the pipeline's
//! text outputs:
//!
//! - [`read_grid`] / [`read_grid_from`] - parse `rows cols min max`
//!   plus row-major cell values into a `Grid`
//! - [`write_grid_pretty`] - the annotated grid
//! - [`write_profile_listing`], [`write_direction`],
//!   [`write_box_listing`] - the debug artifact stream

pub mod error;
pub mod format;
pub mod render;

pub use error::{IoError, IoResult};
pub use format::{read_grid, read_grid_from};
pub use render::{write_box_listing, write_direction, write_grid_pretty, write_profile_listing};
