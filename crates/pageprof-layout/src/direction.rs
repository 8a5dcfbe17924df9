//! Reading-direction classification
//!
//! The dominant text-flow axis is inferred from the number of maximal
//! runs in the closed projection profiles: many row runs mean
//! horizontal lines of text stacked down the page, many column runs
//! mean vertical script.

use pageprof_core::BinaryProfile;

/// Ratio a run count must reach over the perpendicular axis before
/// that axis is called dominant.
pub const DIRECTION_RUN_FACTOR: u32 = 3;

/// Dominant text-flow axis of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingDirection {
    /// Text flows along rows; extraction scans the closed HPP.
    Horizontal,
    /// Text flows along columns; extraction scans the closed VPP.
    Vertical,
    /// Neither axis dominates; no boxes are extracted.
    Indeterminate,
}

impl std::fmt::Display for ReadingDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReadingDirection::Horizontal => "horizontal",
            ReadingDirection::Vertical => "vertical",
            ReadingDirection::Indeterminate => "indeterminate",
        };
        f.write_str(name)
    }
}

/// Classify the reading direction from the closed profiles.
///
/// With `h` runs in `closed_hpp` and `v` runs in `closed_vpp`, the
/// answer is `Horizontal` if `h >= factor * v`, else `Vertical` if
/// `v >= factor * h`, else `Indeterminate`. The horizontal test runs
/// first, so a page with no runs on either axis classifies
/// `Horizontal`. Equal nonzero counts are `Indeterminate` for any
/// `factor > 1`.
pub fn classify(
    closed_hpp: &BinaryProfile,
    closed_vpp: &BinaryProfile,
    factor: u32,
) -> ReadingDirection {
    let h = closed_hpp.count_runs() as u64;
    let v = closed_vpp.count_runs() as u64;
    let factor = u64::from(factor);
    if h >= factor * v {
        ReadingDirection::Horizontal
    } else if v >= factor * h {
        ReadingDirection::Vertical
    } else {
        ReadingDirection::Indeterminate
    }
}
