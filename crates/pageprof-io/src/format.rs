//! Grid text format
//!
//! A grid file is one whitespace-separated token stream: a header of
//! four integers `rows cols min max`, then `rows * cols` non-negative
//! cell values in row-major order. Line breaks carry no meaning. The
//! header's `min`/`max` are recorded on the grid and not otherwise
//! interpreted.

use crate::error::{IoError, IoResult};
use pageprof_core::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a grid from a file.
pub fn read_grid(path: impl AsRef<Path>) -> IoResult<Grid> {
    let file = File::open(path.as_ref())?;
    read_grid_from(BufReader::new(file))
}

/// Read a grid from any buffered reader.
pub fn read_grid_from(mut reader: impl BufRead) -> IoResult<Grid> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_ascii_whitespace();

    let mut header = [0i64; 4];
    for (i, slot) in header.iter_mut().enumerate() {
        let token = tokens.next().ok_or(IoError::Truncated {
            expected: 4,
            actual: i,
        })?;
        *slot = token
            .parse()
            .map_err(|_| IoError::InvalidToken(token.to_string()))?;
    }
    let [rows, cols, min_val, max_val] = header;

    if rows < 1 || cols < 1 {
        return Err(IoError::InvalidDimensions { rows, cols });
    }
    let rows = u32::try_from(rows).map_err(|_| IoError::InvalidDimensions { rows, cols })?;
    let cols =
        u32::try_from(cols).map_err(|_| IoError::InvalidDimensions { rows: rows as i64, cols })?;

    let mut grid = Grid::new(rows, cols)?;
    grid.set_declared_range(header_range(min_val)?, header_range(max_val)?);

    let expected = rows as usize * cols as usize;
    let mut read = 0usize;
    for row in 1..=rows {
        for col in 1..=cols {
            let token = tokens.next().ok_or(IoError::Truncated {
                expected,
                actual: read,
            })?;
            let val: u32 = token
                .parse()
                .map_err(|_| IoError::InvalidToken(token.to_string()))?;
            grid.set(row, col, val)?;
            read += 1;
        }
    }
    Ok(grid)
}

fn header_range(value: i64) -> IoResult<u32> {
    u32::try_from(value).map_err(|_| IoError::InvalidToken(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_middle_bar_grid() {
        let input = "3 3 0 1\n0 0 0\n1 1 1\n0 0 0\n";
        let grid = read_grid_from(input.as_bytes()).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.declared_range(), (0, 1));
        assert_eq!(grid.get(2, 1), Some(1));
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.count_foreground(), 3);
    }

    #[test]
    fn test_line_breaks_are_insignificant() {
        let one_line = read_grid_from("2 2 0 5 1 0 0 5".as_bytes()).unwrap();
        let multi_line = read_grid_from("2 2\n0 5\n1 0\n0 5\n".as_bytes()).unwrap();
        assert_eq!(one_line, multi_line);
    }

    #[test]
    fn test_nonpositive_dimensions_rejected() {
        assert!(matches!(
            read_grid_from("0 3 0 1 1 2 3".as_bytes()),
            Err(IoError::InvalidDimensions { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            read_grid_from("3 -1 0 1".as_bytes()),
            Err(IoError::InvalidDimensions { rows: 3, cols: -1 })
        ));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            read_grid_from("3 3 0".as_bytes()),
            Err(IoError::Truncated {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_truncated_cells() {
        assert!(matches!(
            read_grid_from("2 3 0 1\n1 0 1 0 1".as_bytes()),
            Err(IoError::Truncated {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_invalid_cell_token() {
        assert!(matches!(
            read_grid_from("2 2 0 1\n1 0 x 0".as_bytes()),
            Err(IoError::InvalidToken(_))
        ));
        // Cells are non-negative
        assert!(matches!(
            read_grid_from("2 2 0 1\n1 0 -3 0".as_bytes()),
            Err(IoError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let grid = read_grid_from("1 2 0 1\n1 0 9 9 9".as_bytes()).unwrap();
        assert_eq!(grid.count_foreground(), 1);
    }
}
