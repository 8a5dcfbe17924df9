//! Text-line box extraction
//!
//! Scans the closed profile of the dominant axis for maximal runs of
//! active entries. Each run spans one text line along that axis; a
//! sweep over the grid inside the run band tightens the perpendicular
//! bounds to the actual foreground extent.

use crate::direction::ReadingDirection;
use crate::error::{LayoutError, LayoutResult};
use pageprof_core::{BinaryProfile, BoxList, Grid, LayoutBox};

/// Extract line-level boxes from the closed profile of the dominant
/// axis.
///
/// `closed` is the closed HPP for [`ReadingDirection::Horizontal`] and
/// the closed VPP for [`ReadingDirection::Vertical`]; its length must
/// match the scanned grid axis. An [`ReadingDirection::Indeterminate`]
/// page yields an empty list. Boxes are appended in scan order, and
/// every box satisfies `1 <= min <= max <= rows/cols` by construction
/// from nonempty runs.
pub fn find_line_boxes(
    direction: ReadingDirection,
    closed: &BinaryProfile,
    grid: &Grid,
) -> LayoutResult<BoxList> {
    let mut boxes = BoxList::new();
    match direction {
        ReadingDirection::Indeterminate => {}
        ReadingDirection::Horizontal => {
            check_length(closed, grid.rows())?;
            extract_row_runs(closed, grid, &mut boxes)?;
        }
        ReadingDirection::Vertical => {
            check_length(closed, grid.cols())?;
            extract_col_runs(closed, grid, &mut boxes)?;
        }
    }
    Ok(boxes)
}

fn check_length(closed: &BinaryProfile, axis: u32) -> LayoutResult<()> {
    if closed.len() != axis as usize {
        return Err(LayoutError::ProfileLength {
            expected: axis as usize,
            actual: closed.len(),
        });
    }
    Ok(())
}

fn extract_row_runs(closed: &BinaryProfile, grid: &Grid, boxes: &mut BoxList) -> LayoutResult<()> {
    let rows = grid.rows();
    let values = closed.values();
    let mut k = 1u32;
    while k <= rows {
        if values[k as usize - 1] == 0 {
            k += 1;
            continue;
        }
        let min_row = k;
        while k <= rows && values[k as usize - 1] > 0 {
            k += 1;
        }
        let max_row = k - 1;
        let (min_col, max_col) = column_extent(grid, min_row, max_row);
        boxes.push(LayoutBox::line(min_row, min_col, max_row, max_col)?);
    }
    Ok(())
}

fn extract_col_runs(closed: &BinaryProfile, grid: &Grid, boxes: &mut BoxList) -> LayoutResult<()> {
    let cols = grid.cols();
    let values = closed.values();
    let mut k = 1u32;
    while k <= cols {
        if values[k as usize - 1] == 0 {
            k += 1;
            continue;
        }
        let min_col = k;
        while k <= cols && values[k as usize - 1] > 0 {
            k += 1;
        }
        let max_col = k - 1;
        let (min_row, max_row) = row_extent(grid, min_col, max_col);
        boxes.push(LayoutBox::line(min_row, min_col, max_row, max_col)?);
    }
    Ok(())
}

/// Tightest column span of foreground cells in the row band.
fn column_extent(grid: &Grid, min_row: u32, max_row: u32) -> (u32, u32) {
    let mut min_col = 0;
    let mut max_col = 0;
    for row in min_row..=max_row {
        for col in 1..=grid.cols() {
            if grid.is_foreground(row, col) {
                if min_col == 0 || col < min_col {
                    min_col = col;
                }
                if col > max_col {
                    max_col = col;
                }
            }
        }
    }
    (min_col, max_col)
}

/// Tightest row span of foreground cells in the column band.
fn row_extent(grid: &Grid, min_col: u32, max_col: u32) -> (u32, u32) {
    let mut min_row = 0;
    let mut max_row = 0;
    for row in 1..=grid.rows() {
        for col in min_col..=max_col {
            if grid.is_foreground(row, col) {
                if min_row == 0 || row < min_row {
                    min_row = row;
                }
                if row > max_row {
                    max_row = row;
                }
            }
        }
    }
    (min_row, max_row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[u32]]) -> Grid {
        let mut grid = Grid::new(rows.len() as u32, rows[0].len() as u32).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid.set(r as u32 + 1, c as u32 + 1, v).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_indeterminate_yields_no_boxes() {
        let grid = grid_from_rows(&[&[1, 1], &[1, 1]]);
        let closed = BinaryProfile::from_values(vec![1, 1]);
        let boxes = find_line_boxes(ReadingDirection::Indeterminate, &closed, &grid).unwrap();
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_horizontal_single_band() {
        let grid = grid_from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 2, 1, 0, 0],
            &[0, 0, 3, 1, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let closed = BinaryProfile::from_values(vec![0, 1, 1, 0]);
        let boxes = find_line_boxes(ReadingDirection::Horizontal, &closed, &grid).unwrap();
        assert_eq!(boxes.len(), 1);
        let b = boxes.get(0).unwrap();
        assert_eq!((b.min_row, b.min_col, b.max_row, b.max_col), (2, 2, 3, 4));
    }

    #[test]
    fn test_horizontal_two_bands_in_scan_order() {
        let grid = grid_from_rows(&[
            &[1, 1, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 1, 1],
            &[0, 1, 1, 0],
        ]);
        let closed = BinaryProfile::from_values(vec![1, 0, 1, 1]);
        let boxes = find_line_boxes(ReadingDirection::Horizontal, &closed, &grid).unwrap();
        assert_eq!(boxes.len(), 2);
        let first = boxes.get(0).unwrap();
        assert_eq!(
            (first.min_row, first.min_col, first.max_row, first.max_col),
            (1, 1, 1, 2)
        );
        let second = boxes.get(1).unwrap();
        assert_eq!(
            (second.min_row, second.min_col, second.max_row, second.max_col),
            (3, 2, 4, 4)
        );
    }

    #[test]
    fn test_vertical_band_tightens_rows() {
        let grid = grid_from_rows(&[
            &[0, 0, 0],
            &[1, 1, 1],
            &[0, 0, 0],
        ]);
        let closed = BinaryProfile::from_values(vec![1, 1, 1]);
        let boxes = find_line_boxes(ReadingDirection::Vertical, &closed, &grid).unwrap();
        assert_eq!(boxes.len(), 1);
        let b = boxes.get(0).unwrap();
        assert_eq!((b.min_row, b.min_col, b.max_row, b.max_col), (2, 1, 2, 3));
    }

    #[test]
    fn test_boxes_stay_inside_grid_bounds() {
        let grid = grid_from_rows(&[
            &[1, 0, 1, 1],
            &[1, 0, 1, 1],
            &[1, 0, 0, 0],
        ]);
        let closed = BinaryProfile::from_values(vec![1, 0, 1, 1]);
        let boxes = find_line_boxes(ReadingDirection::Vertical, &closed, &grid).unwrap();
        assert_eq!(boxes.len(), 2);
        for b in boxes.iter() {
            assert!(b.min_row >= 1 && b.max_row <= grid.rows());
            assert!(b.min_col >= 1 && b.max_col <= grid.cols());
            assert!(b.min_row <= b.max_row);
            assert!(b.min_col <= b.max_col);
        }
    }

    #[test]
    fn test_profile_length_mismatch_is_rejected() {
        let grid = grid_from_rows(&[&[1, 1], &[1, 1]]);
        let closed = BinaryProfile::from_values(vec![1, 1, 1]);
        let err = find_line_boxes(ReadingDirection::Horizontal, &closed, &grid);
        assert!(matches!(err, Err(LayoutError::ProfileLength { .. })));
    }
}
