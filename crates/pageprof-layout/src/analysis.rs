//! Staged layout analysis
//!
//! [`analyze`] runs the whole pipeline over a grid and returns every
//! intermediate artifact, so the stages stay individually inspectable
//! and the debug listing can be produced without recomputation.

use crate::direction::{self, ReadingDirection};
use crate::error::LayoutResult;
use crate::textline;
use pageprof_core::{BinaryProfile, BoxList, Grid, Profile, projection_profiles, threshold};
use pageprof_morph::close;

/// Every artifact of one analysis run, in stage order.
#[derive(Debug, Clone)]
pub struct LayoutAnalysis {
    /// Horizontal projection profile (per-row foreground counts).
    pub hpp: Profile,
    /// Vertical projection profile (per-column foreground counts).
    pub vpp: Profile,
    /// Thresholded HPP.
    pub hpp_bin: BinaryProfile,
    /// Thresholded VPP.
    pub vpp_bin: BinaryProfile,
    /// Closed HPP.
    pub hpp_closed: BinaryProfile,
    /// Closed VPP.
    pub vpp_closed: BinaryProfile,
    /// Inferred reading direction.
    pub direction: ReadingDirection,
    /// Extracted line boxes, in scan order.
    pub boxes: BoxList,
}

/// Run the full pipeline: projection, thresholding, closing, direction
/// classification, and line-box extraction.
///
/// `factor` is the run-count ratio for the direction heuristic;
/// [`direction::DIRECTION_RUN_FACTOR`] is the standard choice.
pub fn analyze(grid: &Grid, threshold_value: u32, factor: u32) -> LayoutResult<LayoutAnalysis> {
    let (hpp, vpp) = projection_profiles(grid);
    let hpp_bin = threshold(&hpp, threshold_value);
    let vpp_bin = threshold(&vpp, threshold_value);
    let hpp_closed = close(&hpp_bin);
    let vpp_closed = close(&vpp_bin);
    let direction = direction::classify(&hpp_closed, &vpp_closed, factor);
    let boxes = match direction {
        ReadingDirection::Horizontal => {
            textline::find_line_boxes(direction, &hpp_closed, grid)?
        }
        ReadingDirection::Vertical => textline::find_line_boxes(direction, &vpp_closed, grid)?,
        ReadingDirection::Indeterminate => BoxList::new(),
    };
    Ok(LayoutAnalysis {
        hpp,
        vpp,
        hpp_bin,
        vpp_bin,
        hpp_closed,
        vpp_closed,
        direction,
        boxes,
    })
}
