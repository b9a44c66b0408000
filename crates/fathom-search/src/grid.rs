//! The passability capability shared by every search backend.

use fathom_core::GridPos;
use fathom_map::{DenseGrid, BLOCKED};
use smallvec::SmallVec;

/// Row/column offsets of the 4-connected neighbourhood: north, south,
/// west, east.
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A bounded grid that can answer "may I stand here?".
///
/// Backends only ever query cells through this trait. Positions outside
/// `rows() x cols()` must report as impassable.
pub trait PassabilityGrid {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Returns `true` if `pos` is inside the grid and open.
    fn is_passable(&self, pos: GridPos) -> bool;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Flat row-major index of `pos`. Does not bounds-check.
    fn flat(&self, pos: GridPos) -> usize {
        pos.row * self.cols() + pos.col
    }

    /// Passable 4-connected neighbours of `pos`.
    ///
    /// Returned in a fixed north, south, west, east order so searches are
    /// deterministic.
    fn neighbours(&self, pos: GridPos) -> SmallVec<[GridPos; 4]> {
        let mut out = SmallVec::new();
        for (dr, dc) in OFFSETS {
            let (Some(row), Some(col)) = (
                pos.row.checked_add_signed(dr),
                pos.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            let nb = GridPos::new(row, col);
            if self.is_passable(nb) {
                out.push(nb);
            }
        }
        out
    }
}

impl PassabilityGrid for DenseGrid {
    fn rows(&self) -> usize {
        DenseGrid::rows(self)
    }

    fn cols(&self) -> usize {
        DenseGrid::cols(self)
    }

    fn is_passable(&self, pos: GridPos) -> bool {
        self.get(pos).is_some_and(|v| v != BLOCKED)
    }
}

/// Plain boolean layouts, `grid[row][col] == true` meaning open.
///
/// Column count is taken from the first row; shorter rows read as blocked
/// past their end.
impl PassabilityGrid for Vec<Vec<bool>> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn is_passable(&self, pos: GridPos) -> bool {
        pos.col < PassabilityGrid::cols(self)
            && self
                .get(pos.row)
                .and_then(|r| r.get(pos.col))
                .copied()
                .unwrap_or(false)
    }
}
