//! Morphological closing of binary profiles
//!
//! Closing is dilation followed by erosion with the fixed [`GAP_SEL`]
//! element. Both passes work in buffers two slots longer than the
//! profile, zeroed before use; slot 0 and slot `len + 1` are a writable
//! zero border for the neighbor accesses at the ends, and whatever the
//! dilation pass wrote there is visible to the erosion pass.
//!
//! Net effect on a profile: a single-cell gap between two runs is
//! filled, a run of length 3 or more passes through unchanged, and an
//! isolated single active cell is erased.

use crate::sel::{GAP_SEL, LineSel};
use pageprof_core::BinaryProfile;

/// Close a binary profile: dilation then erosion with [`GAP_SEL`].
pub fn close(profile: &BinaryProfile) -> BinaryProfile {
    let len = profile.len();
    if len == 0 {
        return BinaryProfile::from_values(Vec::new());
    }

    let mut src = vec![0u8; len + 2];
    src[1..=len].copy_from_slice(profile.values());

    let mut scratch = vec![0u8; len + 2];
    dilate_pass(&src, &mut scratch, &GAP_SEL);

    let mut out = vec![0u8; len + 2];
    erode_pass(&scratch, &mut out, &GAP_SEL);

    BinaryProfile::from_values(out[1..=len].to_vec())
}

/// Dilation pass over a padded buffer.
///
/// For each interior position holding the origin value, the element
/// values are written into the non-origin neighbor slots of `dst`,
/// border slots included. The position's own slot is skipped, so it
/// stays active in `dst` only when a neighbor also writes it. `dst`
/// must be zeroed on entry.
fn dilate_pass(src: &[u8], dst: &mut [u8], sel: &LineSel) {
    let len = src.len() - 2;
    for i in 1..=len {
        if src[i] != sel.origin_value() {
            continue;
        }
        for (offset, value) in sel.neighbors() {
            let j = (i as isize + offset) as usize;
            dst[j] = value;
        }
    }
}

/// Erosion pass over a padded buffer.
///
/// An interior position survives only when it holds the origin value
/// and every non-origin neighbor slot matches the element. Positions
/// not holding the origin value are left at `dst`'s zero
/// initialization.
fn erode_pass(src: &[u8], dst: &mut [u8], sel: &LineSel) {
    let len = src.len() - 2;
    for i in 1..=len {
        if src[i] != sel.origin_value() {
            continue;
        }
        let matches = sel
            .neighbors()
            .all(|(offset, value)| src[(i as isize + offset) as usize] == value);
        dst[i] = if matches { sel.origin_value() } else { 0 };
    }
}
