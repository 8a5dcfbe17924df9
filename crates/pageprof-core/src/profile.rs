//! Projection profiles and thresholding
//!
//! A [`Profile`] holds per-row or per-column foreground counts computed
//! from a [`Grid`] by [`projection_profiles`]. [`threshold`] binarizes
//! a profile against a scalar threshold, producing a [`BinaryProfile`]
//! that also records the realized (min, max) of the result.
//!
//! Profiles are 0-indexed in code: entry `i` describes logical grid
//! row/column `i + 1`. The 1-based view appears only in the debug
//! listing output.

use crate::grid::Grid;

/// Per-row or per-column foreground-pixel counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    values: Vec<u32>,
}

impl Profile {
    /// Wrap a vector of counts.
    pub fn from_vec(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// All entries.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Minimum and maximum entry, or `(0, 0)` for an empty profile.
    pub fn extrema(&self) -> (u32, u32) {
        let min = self.values.iter().copied().min().unwrap_or(0);
        let max = self.values.iter().copied().max().unwrap_or(0);
        (min, max)
    }

    /// Sum of all entries.
    pub fn sum(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }
}

/// Binarized profile with entries in {0, 1}.
///
/// Carries the realized `(min, max)` of its entries: `(0, 1)` when both
/// values occur, `(1, 1)` when only ones occur, `(0, 0)` when only
/// zeros occur (and for the empty profile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryProfile {
    values: Vec<u8>,
    min: u8,
    max: u8,
}

impl BinaryProfile {
    /// Wrap entries already known to be 0/1, computing realized extrema.
    pub fn from_values(values: Vec<u8>) -> Self {
        debug_assert!(values.iter().all(|&v| v <= 1));
        let ones = values.contains(&1);
        let zeros = values.contains(&0);
        let (min, max) = match (zeros, ones) {
            (true, true) => (0, 1),
            (false, true) => (1, 1),
            _ => (0, 0),
        };
        Self { values, min, max }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.values.get(index).copied()
    }

    /// All entries.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Realized `(min, max)` pair.
    pub fn extrema(&self) -> (u8, u8) {
        (self.min, self.max)
    }

    /// Count maximal runs of consecutive positive entries.
    pub fn count_runs(&self) -> usize {
        let mut runs = 0;
        let mut in_run = false;
        for &v in &self.values {
            if v > 0 {
                if !in_run {
                    runs += 1;
                    in_run = true;
                }
            } else {
                in_run = false;
            }
        }
        runs
    }
}

/// Compute the horizontal and vertical projection profiles of a grid.
///
/// One pass over the interior: `hpp[i]` counts foreground cells in row
/// `i + 1`, `vpp[j]` in column `j + 1`. Both profiles sum to the total
/// foreground count.
pub fn projection_profiles(grid: &Grid) -> (Profile, Profile) {
    let mut hpp = vec![0u32; grid.rows() as usize];
    let mut vpp = vec![0u32; grid.cols() as usize];
    for row in 1..=grid.rows() {
        for col in 1..=grid.cols() {
            if grid.is_foreground(row, col) {
                hpp[row as usize - 1] += 1;
                vpp[col as usize - 1] += 1;
            }
        }
    }
    (Profile::from_vec(hpp), Profile::from_vec(vpp))
}

/// Binarize a profile against a scalar threshold.
///
/// Entry `i` of the result is 1 iff `profile[i] >= t`, and the realized
/// extrema are determined in the same pass. Thresholding an
/// already-binary profile at `t = 1` returns the same entries.
pub fn threshold(profile: &Profile, t: u32) -> BinaryProfile {
    let values = profile.values().iter().map(|&v| u8::from(v >= t)).collect();
    BinaryProfile::from_values(values)
}
