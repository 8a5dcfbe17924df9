//! Box outline rendering
//!
//! Overlays box borders onto a grid without destroying content: an
//! outline cell is set to 1 only when it is currently 0, so drawing the
//! same boxes twice leaves the grid unchanged.

use crate::boxes::{BoxList, LayoutBox};
use crate::grid::Grid;

impl Grid {
    /// Draw one box outline, flipping only zero cells to 1.
    ///
    /// Box coordinates are interior by the [`LayoutBox`] invariant, so
    /// the border is never touched.
    pub fn draw_box_outline(&mut self, b: &LayoutBox) {
        for col in b.min_col..=b.max_col {
            self.mark(b.min_row, col);
            self.mark(b.max_row, col);
        }
        for row in b.min_row..=b.max_row {
            self.mark(row, b.min_col);
            self.mark(row, b.max_col);
        }
    }

    /// Draw every box in the list, in insertion order.
    pub fn draw_boxes(&mut self, boxes: &BoxList) {
        for b in boxes.boxes() {
            self.draw_box_outline(b);
        }
    }

    fn mark(&mut self, row: u32, col: u32) {
        if self.get_unchecked(row, col) == 0 {
            self.set_unchecked(row, col, 1);
        }
    }
}
