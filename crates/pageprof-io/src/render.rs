//! Text rendering of pipeline artifacts
//!
//! Three writers cover the tool's output surface:
//!
//! - [`write_grid_pretty`] - the grid itself, foreground values
//!   printed, background as blank space, with an optional caption
//! - [`write_profile_listing`] - one profile artifact as an indexed
//!   `index value` listing under a `rows cols min max` header
//! - [`write_direction`] / [`write_box_listing`] - the classification
//!   line and the extracted boxes
//!
//! Every block ends with one blank line; a nonempty caption takes the
//! line before it.

use crate::error::IoResult;
use pageprof_core::{BoxList, Grid};
use std::fmt::Display;
use std::io::Write;

/// Write the grid, one line per row.
///
/// Foreground cells print as `{value} `, background cells as two
/// spaces.
pub fn write_grid_pretty(w: &mut impl Write, grid: &Grid, caption: &str) -> IoResult<()> {
    for row in 1..=grid.rows() {
        for col in 1..=grid.cols() {
            let val = grid.get_unchecked(row, col);
            if val > 0 {
                write!(w, "{val} ")?;
            } else {
                write!(w, "  ")?;
            }
        }
        writeln!(w)?;
    }
    finish_block(w, caption)
}

/// Write one profile artifact listing.
///
/// Header `rows cols min max`, then `index value` per entry with the
/// index printed 1-based, the artifact name as caption, and a closing
/// blank line.
pub fn write_profile_listing<T: Display>(
    w: &mut impl Write,
    grid: &Grid,
    values: &[T],
    extrema: (T, T),
    caption: &str,
) -> IoResult<()> {
    let (min, max) = extrema;
    writeln!(w, "{} {} {} {}", grid.rows(), grid.cols(), min, max)?;
    for (i, val) in values.iter().enumerate() {
        writeln!(w, "{} {}", i + 1, val)?;
    }
    finish_block(w, caption)
}

/// Write the reading-direction line and a trailing blank line.
pub fn write_direction(w: &mut impl Write, direction: &impl Display) -> IoResult<()> {
    writeln!(w, "Reading direction: {direction}.")?;
    writeln!(w)?;
    Ok(())
}

/// Write the box listing: per box the numeric kind code on one line,
/// then the four bounds. A nonempty list is closed by one blank line;
/// an empty list writes nothing.
pub fn write_box_listing(w: &mut impl Write, boxes: &BoxList) -> IoResult<()> {
    if boxes.is_empty() {
        return Ok(());
    }
    for b in boxes.boxes() {
        writeln!(w, "{}", b.kind.code())?;
        writeln!(w, "{} {} {} {}", b.min_row, b.min_col, b.max_row, b.max_col)?;
    }
    writeln!(w)?;
    Ok(())
}

fn finish_block(w: &mut impl Write, caption: &str) -> IoResult<()> {
    if !caption.is_empty() {
        writeln!(w, "{caption}")?;
    }
    writeln!(w)?;
    Ok(())
}
