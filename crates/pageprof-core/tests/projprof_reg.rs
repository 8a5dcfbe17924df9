//! Projection profile regression test
//!
//! Checks the conservation property (both profiles sum to the total
//! foreground count) and the reported extrema over several grid shapes.

use pageprof_core::{Grid, projection_profiles};
use pageprof_test::RegParams;

fn fill(grid: &mut Grid, cells: &[(u32, u32, u32)]) {
    for &(row, col, val) in cells {
        grid.set(row, col, val).unwrap();
    }
}

#[test]
fn projprof_reg() {
    let mut rp = RegParams::new("projprof");

    // Empty grid: everything zero
    let empty = Grid::new(4, 6).unwrap();
    let (hpp, vpp) = projection_profiles(&empty);
    rp.compare_values(0.0, hpp.sum() as f64, 0.0);
    rp.compare_values(0.0, vpp.sum() as f64, 0.0);
    rp.compare_values(0.0, hpp.extrema().1 as f64, 0.0);

    // Full grid: every row counts cols, every column counts rows
    let mut full = Grid::new(3, 5).unwrap();
    for row in 1..=3 {
        for col in 1..=5 {
            full.set(row, col, 1).unwrap();
        }
    }
    let (hpp, vpp) = projection_profiles(&full);
    rp.compare_values(15.0, hpp.sum() as f64, 0.0);
    rp.compare_values(15.0, vpp.sum() as f64, 0.0);
    assert_eq!(hpp.values(), &[5, 5, 5]);
    assert_eq!(vpp.values(), &[3, 3, 3]);
    assert_eq!(hpp.extrema(), (5, 5));
    assert_eq!(vpp.extrema(), (3, 3));

    // Checkerboard: 0-indexed parity, intensities above 1 still count once
    let mut checker = Grid::new(4, 4).unwrap();
    for row in 1..=4 {
        for col in 1..=4 {
            if (row + col) % 2 == 0 {
                checker.set(row, col, 6).unwrap();
            }
        }
    }
    let (hpp, vpp) = projection_profiles(&checker);
    rp.compare_values(8.0, checker.count_foreground() as f64, 0.0);
    rp.compare_values(8.0, hpp.sum() as f64, 0.0);
    rp.compare_values(8.0, vpp.sum() as f64, 0.0);
    assert_eq!(hpp.values(), &[2, 2, 2, 2]);
    assert_eq!(vpp.values(), &[2, 2, 2, 2]);

    // Scattered cells with mixed intensities
    let mut sparse = Grid::new(5, 7).unwrap();
    fill(
        &mut sparse,
        &[(1, 1, 9), (1, 7, 2), (3, 4, 1), (5, 2, 3), (5, 6, 8)],
    );
    let (hpp, vpp) = projection_profiles(&sparse);
    rp.compare_values(5.0, sparse.count_foreground() as f64, 0.0);
    rp.compare_values(5.0, hpp.sum() as f64, 0.0);
    rp.compare_values(5.0, vpp.sum() as f64, 0.0);
    assert_eq!(hpp.values(), &[2, 0, 1, 0, 2]);
    assert_eq!(vpp.values(), &[1, 1, 0, 1, 0, 1, 1]);
    assert_eq!(hpp.extrema(), (0, 2));
    assert_eq!(vpp.extrema(), (0, 1));

    assert!(rp.cleanup(), "projprof regression test failed");
}
