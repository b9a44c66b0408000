//! Dense rectangular snapshots of a sparse map.

use crate::sparse::SparseGridMap;
use fathom_core::{Coord, GridPos, MapError};

/// Dense cell value: impassable, or never discovered.
pub const BLOCKED: u8 = 0;
/// Dense cell value: open and not yet saturated.
pub const OPEN: u8 = 1;
/// Dense cell value: saturated by diffusion, or part of an overlaid path.
pub const MARKED: u8 = 2;

/// Largest bounding rectangle [`densify`] will allocate, in cells (256 MiB).
pub const MAX_CELLS: u64 = 1 << 28;

/// A bounded row-major grid of `{0, 1, 2}` values plus the offset that
/// maps sparse coordinates onto it.
///
/// `grid[y - offset.y][x - offset.x]` holds the sparse cell `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    offset: Coord,
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl DenseGrid {
    /// Build a grid from explicit rows, with a zero offset.
    ///
    /// Useful for feeding hand-written layouts to the search algorithms.
    ///
    /// # Errors
    ///
    /// Returns `Err(MapError::EmptyMap)` when there are no rows or the
    /// rows are empty, and `Err(MapError::Ragged)` when row lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use fathom_map::DenseGrid;
    ///
    /// let grid = DenseGrid::from_rows(&[[1u8, 1, 0], [0, 1, 1]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MapError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MapError::EmptyMap);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MapError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            offset: Coord::ORIGIN,
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Sparse coordinate of grid position `[0, 0]`.
    pub fn offset(&self) -> Coord {
        self.offset
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Raw row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// One row of cell values.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Flat index of `pos`, or `None` if it lies outside the grid.
    pub fn index(&self, pos: GridPos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Grid position of a flat index.
    pub fn pos(&self, index: usize) -> GridPos {
        GridPos::new(index / self.cols, index % self.cols)
    }

    /// Value at `pos`, or `None` if it lies outside the grid.
    pub fn get(&self, pos: GridPos) -> Option<u8> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the value at `pos`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: GridPos, value: u8) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = value;
        }
    }

    /// Translate a sparse coordinate into a grid position.
    pub fn to_local(&self, coord: Coord) -> Option<GridPos> {
        let row = i64::from(coord.y) - i64::from(self.offset.y);
        let col = i64::from(coord.x) - i64::from(self.offset.x);
        if row < 0 || col < 0 {
            return None;
        }
        let pos = GridPos::new(row as usize, col as usize);
        self.index(pos).map(|_| pos)
    }

    /// Translate a grid position back into a sparse coordinate.
    pub fn to_global(&self, pos: GridPos) -> Coord {
        Coord::new(
            self.offset.x + pos.col as i32,
            self.offset.y + pos.row as i32,
        )
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// A copy of this grid with every cell of `path` set to [`MARKED`].
    pub fn with_path(&self, path: &[GridPos]) -> DenseGrid {
        let mut out = self.clone();
        for &pos in path {
            out.set(pos, MARKED);
        }
        out
    }
}

/// Snapshot a sparse map into a dense grid.
///
/// The offset is the component-wise minimum over every stored coordinate,
/// so the result does not depend on insertion order. Passable tags
/// become [`OPEN`]; walls and any rectangle cell never stored become
/// [`BLOCKED`].
///
/// # Errors
///
/// Returns `Err(MapError::EmptyMap)` if nothing has been discovered, or
/// `Err(MapError::TooLarge)` if the bounding rectangle holds more than
/// [`MAX_CELLS`] cells.
pub fn densify(map: &SparseGridMap) -> Result<DenseGrid, MapError> {
    let bounds = map.bounds().ok_or(MapError::EmptyMap)?;
    let (rows, cols) = (bounds.height(), bounds.width());
    let len = rows
        .checked_mul(cols)
        .filter(|&n| n <= MAX_CELLS)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(MapError::TooLarge { rows, cols })?;

    let mut grid = DenseGrid {
        offset: bounds.min,
        rows: rows as usize,
        cols: cols as usize,
        cells: vec![BLOCKED; len],
    };
    for (coord, cell) in map.iter() {
        if cell.is_passable() {
            if let Some(pos) = grid.to_local(coord) {
                grid.set(pos, OPEN);
            }
        }
    }
    log::debug!(
        "densified {} cells into {}x{} grid at offset {}",
        map.len(),
        grid.rows,
        grid.cols,
        grid.offset
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::{Cell, CellTag};
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn sample_map() -> SparseGridMap {
        let mut map = SparseGridMap::new();
        map.set(c(0, 0), Cell::new(CellTag::Origin));
        map.set(c(1, 0), Cell::new(CellTag::Open));
        map.set(c(2, 0), Cell::new(CellTag::Wall));
        map.set(c(-1, 1), Cell::new(CellTag::Target));
        map.set(c(1, -1), Cell::new(CellTag::Saturated));
        map
    }

    #[test]
    fn empty_map_is_an_error() {
        assert_eq!(densify(&SparseGridMap::new()), Err(MapError::EmptyMap));
    }

    #[test]
    fn oversized_bounds_are_rejected_before_allocating() {
        let mut map = SparseGridMap::new();
        map.set(c(i32::MIN, 0), Cell::new(CellTag::Open));
        map.set(c(i32::MAX, 0), Cell::new(CellTag::Open));
        assert_eq!(
            densify(&map),
            Err(MapError::TooLarge {
                rows: 1,
                cols: 1 << 32
            })
        );
    }

    #[test]
    fn cell_cap_is_exclusive_of_larger_rectangles() {
        // One cell past the cap on a single row.
        let mut map = SparseGridMap::new();
        map.set(c(0, 0), Cell::new(CellTag::Wall));
        map.set(c(MAX_CELLS as i32, 0), Cell::new(CellTag::Wall));
        assert_eq!(
            densify(&map),
            Err(MapError::TooLarge {
                rows: 1,
                cols: MAX_CELLS + 1
            })
        );
        // A rectangle well under the cap densifies normally.
        let mut small = SparseGridMap::new();
        small.set(c(0, 0), Cell::new(CellTag::Wall));
        small.set(c(999, 999), Cell::new(CellTag::Open));
        assert_eq!(densify(&small).unwrap().len(), 1_000_000);
    }

    #[test]
    fn offset_is_componentwise_minimum() {
        let grid = densify(&sample_map()).unwrap();
        assert_eq!(grid.offset(), c(-1, -1));
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
    }

    #[test]
    fn tags_map_to_dense_values() {
        let grid = densify(&sample_map()).unwrap();
        let at = |x, y| grid.get(grid.to_local(c(x, y)).unwrap()).unwrap();
        assert_eq!(at(0, 0), OPEN);
        assert_eq!(at(1, 0), OPEN);
        assert_eq!(at(2, 0), BLOCKED);
        assert_eq!(at(-1, 1), OPEN);
        assert_eq!(at(1, -1), OPEN);
        // Inside the rectangle but never stored.
        assert_eq!(at(-1, -1), BLOCKED);
        assert_eq!(grid.count(OPEN), 4);
    }

    #[test]
    fn local_and_global_round_trip() {
        let grid = densify(&sample_map()).unwrap();
        let pos = grid.to_local(c(2, 1)).unwrap();
        assert_eq!(pos, GridPos::new(2, 3));
        assert_eq!(grid.to_global(pos), c(2, 1));
        assert_eq!(grid.to_local(c(3, 0)), None);
        assert_eq!(grid.to_local(c(-2, 0)), None);
    }

    #[test]
    fn single_cell_map() {
        let mut map = SparseGridMap::new();
        map.set(c(7, -3), Cell::new(CellTag::Origin));
        let grid = densify(&map).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.cells(), &[OPEN]);
        assert_eq!(grid.offset(), c(7, -3));
    }

    #[test]
    fn unknown_entries_only_widen_bounds() {
        let mut map = SparseGridMap::new();
        map.set(c(0, 0), Cell::new(CellTag::Origin));
        map.visit(c(3, 0));
        let grid = densify(&map).unwrap();
        assert_eq!(grid.cells(), &[OPEN, BLOCKED, BLOCKED, BLOCKED]);
    }

    #[test]
    fn from_rows_validates_shape() {
        assert_eq!(
            DenseGrid::from_rows::<[u8; 0]>(&[]),
            Err(MapError::EmptyMap)
        );
        let ragged: [&[u8]; 2] = [&[1, 1], &[1]];
        assert_eq!(
            DenseGrid::from_rows(&ragged),
            Err(MapError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        let grid = DenseGrid::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        assert_eq!(grid.row(1), &[0, 1]);
    }

    #[test]
    fn with_path_leaves_original_untouched() {
        let grid = DenseGrid::from_rows(&[[1u8, 1, 1]]).unwrap();
        let marked = grid.with_path(&[GridPos::new(0, 1), GridPos::new(0, 2)]);
        assert_eq!(marked.cells(), &[OPEN, MARKED, MARKED]);
        assert_eq!(grid.cells(), &[OPEN, OPEN, OPEN]);
    }

    fn arb_tag() -> impl Strategy<Value = CellTag> {
        prop_oneof![
            Just(CellTag::Open),
            Just(CellTag::Wall),
            Just(CellTag::Origin),
            Just(CellTag::Target),
            Just(CellTag::Saturated),
        ]
    }

    proptest! {
        #[test]
        fn densify_ignores_insertion_order(
            entries in prop::collection::vec(((-20i32..20, -20i32..20), arb_tag()), 1..60)
        ) {
            let mut dedup: Vec<(Coord, Cell)> = Vec::new();
            for ((x, y), tag) in entries {
                let coord = c(x, y);
                if !dedup.iter().any(|(k, _)| *k == coord) {
                    dedup.push((coord, Cell::new(tag)));
                }
            }
            let forward: SparseGridMap = dedup.iter().copied().collect();
            let backward: SparseGridMap = dedup.iter().rev().copied().collect();

            let a = densify(&forward).unwrap();
            let b = densify(&backward).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a, densify(&forward).unwrap());
        }

        #[test]
        fn every_stored_cell_lands_on_its_slot(
            entries in prop::collection::vec(((-15i32..15, -15i32..15), arb_tag()), 1..40)
        ) {
            let map: SparseGridMap = entries
                .iter()
                .map(|&((x, y), tag)| (c(x, y), Cell::new(tag)))
                .collect();
            let grid = densify(&map).unwrap();
            for (coord, cell) in map.iter() {
                let pos = grid.to_local(coord).unwrap();
                let expected = if cell.is_passable() { OPEN } else { BLOCKED };
                prop_assert_eq!(grid.get(pos), Some(expected));
            }
        }
    }
}
