//! Unbounded sparse cell store.

use fathom_core::{Cell, CellTag, Coord};
use indexmap::IndexMap;

/// Axis-aligned rectangle spanned by a set of coordinates (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Minimum corner: smallest `x` and smallest `y`.
    pub min: Coord,
    /// Maximum corner: largest `x` and largest `y`.
    pub max: Coord,
}

impl Bounds {
    /// Degenerate bounds covering a single coordinate.
    pub fn point(c: Coord) -> Self {
        Self { min: c, max: c }
    }

    /// Grow the rectangle to include `c`.
    pub fn include(&mut self, c: Coord) {
        self.min.x = self.min.x.min(c.x);
        self.min.y = self.min.y.min(c.y);
        self.max.x = self.max.x.max(c.x);
        self.max.y = self.max.y.max(c.y);
    }

    /// Number of columns spanned.
    pub fn width(&self) -> u64 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64
    }

    /// Number of rows spanned.
    pub fn height(&self) -> u64 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u64
    }

    /// Returns `true` if `c` lies inside the rectangle.
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }
}

/// Mapping from coordinate to [`Cell`] over an unbounded plane.
///
/// Reads never fail: a coordinate that was never written resolves to an
/// `Unknown` cell with zero visits. Storage grows only on writes.
///
/// The map does not enforce wall permanence; callers that own the
/// exploration state are responsible for never retagging a `Wall`.
///
/// Equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGridMap {
    cells: IndexMap<Coord, Cell>,
}

impl SparseGridMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored cell at `coord`, or a default `Unknown` cell.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells.get(&coord).copied().unwrap_or_default()
    }

    /// Shorthand for `self.get(coord).tag`.
    pub fn tag(&self, coord: Coord) -> CellTag {
        self.get(coord).tag
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells.insert(coord, cell);
    }

    /// Change the tag at `coord`, keeping its visit count.
    pub fn retag(&mut self, coord: Coord, tag: CellTag) {
        self.cells.entry(coord).or_default().tag = tag;
    }

    /// Increment the visit count at `coord` and return the new count.
    ///
    /// An unwritten coordinate is stored as `Unknown` with one visit.
    pub fn visit(&mut self, coord: Coord) -> u32 {
        let cell = self.cells.entry(coord).or_default();
        cell.visit_count = cell.visit_count.saturating_add(1);
        cell.visit_count
    }

    /// Returns `true` if `coord` has been written.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of stored coordinates.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over stored cells in insertion order.
    ///
    /// The traversal is lazy and can be restarted by calling `iter` again;
    /// two traversals of an unmodified map yield the same sequence.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().map(|(&c, &cell)| (c, cell))
    }

    /// Iterate over stored cells in row-major order (by `y`, then `x`).
    pub fn iter_row_major(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let mut coords: Vec<Coord> = self.cells.keys().copied().collect();
        coords.sort_unstable_by_key(|c| c.row_major_key());
        coords.into_iter().map(move |c| (c, self.cells[&c]))
    }

    /// Smallest rectangle containing every stored coordinate.
    ///
    /// Returns `None` for an empty map.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut keys = self.cells.keys().copied();
        let first = keys.next()?;
        Some(keys.fold(Bounds::point(first), |mut b, c| {
            b.include(c);
            b
        }))
    }

    /// Number of stored cells carrying `tag`.
    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.values().filter(|c| c.tag == tag).count()
    }

    /// First stored coordinate (in insertion order) carrying `tag`.
    pub fn find(&self, tag: CellTag) -> Option<Coord> {
        self.cells
            .iter()
            .find(|(_, cell)| cell.tag == tag)
            .map(|(&c, _)| c)
    }
}

impl FromIterator<(Coord, Cell)> for SparseGridMap {
    fn from_iter<I: IntoIterator<Item = (Coord, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
