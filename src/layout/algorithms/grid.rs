//! Fixed-column grid layout.
//!
//! Places words left-to-right, top-to-bottom in a fixed-column grid on the
//! z = 0 plane, centered on the origin so the default camera looks at the
//! middle of the block. Rank order reads like text: highest weight top-left.

use serde::Deserialize;

use crate::layout::{LayoutPoint, LayoutStrategy, Vec3};

/// Grid placement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Words per row.
    pub cols: usize,
    /// Distance between neighboring cells.
    pub spacing: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cols: 5,
            spacing: 6.0,
        }
    }
}

impl LayoutStrategy for GridLayout {
    fn place(&self, rank: usize, total: usize) -> LayoutPoint {
        let cols = self.cols.max(1);
        let row = rank / cols;
        let col = rank % cols;

        // Center the block: middle column at x = 0, middle row at y = 0.
        let rows = total.div_ceil(cols);
        let center_row = rows.saturating_sub(1) / 2;

        let x = (col as f64 - (cols / 2) as f64) * self.spacing;
        let y = (center_row as f64 - row as f64) * self.spacing;

        LayoutPoint {
            position: Vec3::new(x, y, 0.0),
            // Fixed, facing the default camera axis.
            orientation: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_top_left_and_center() {
        let grid = GridLayout::default();

        // Rank 0 lands top-left of a full 5x5 block.
        let first = grid.place(0, 25);
        assert_eq!(first.position.x, -12.0);
        assert_eq!(first.position.y, 12.0);
        assert_eq!(first.position.z, 0.0);

        // Rank 12 is the middle cell of the block.
        let middle = grid.place(12, 25);
        assert_eq!(middle.position.x, 0.0);
        assert_eq!(middle.position.y, 0.0);
    }

    #[test]
    fn test_grid_row_major_order() {
        let grid = GridLayout::default();

        let a = grid.place(4, 25);
        let b = grid.place(5, 25);
        // Rank 5 wraps to the next row: back to the left edge, one row down.
        assert!(b.position.x < a.position.x);
        assert!(b.position.y < a.position.y);
    }

    #[test]
    fn test_grid_single_word() {
        let grid = GridLayout::default();
        let point = grid.place(0, 1);
        assert_eq!(point.position.y, 0.0);
        assert_eq!(point.orientation, Vec3::ZERO);
    }

    #[test]
    fn test_grid_zero_cols_guarded() {
        let grid = GridLayout {
            cols: 0,
            spacing: 6.0,
        };
        // Degenerate config clamps to one column instead of dividing by zero.
        let point = grid.place(3, 4);
        assert!(point.position.x.is_finite());
        assert!(point.position.y.is_finite());
    }
}
