//! Diagnostic text renderings of sparse maps and dense grids.

use crate::dense::{DenseGrid, MARKED, OPEN};
use crate::sparse::SparseGridMap;
use fathom_core::Coord;

/// Glyph drawn at the probe's current position.
pub const PROBE_GLYPH: char = 'D';

/// Render the discovered map, one line per row, top row first.
///
/// Uses [`CellTag::glyph`](fathom_core::CellTag::glyph) for every cell and
/// draws [`PROBE_GLYPH`] at `probe` when given. Unknown cells inside the
/// bounding rectangle are spaces. An empty map renders as an empty string.
pub fn render_map(map: &SparseGridMap, probe: Option<Coord>) -> String {
    let Some(mut bounds) = map.bounds() else {
        return String::new();
    };
    if let Some(p) = probe {
        bounds.include(p);
    }
    let mut out = String::with_capacity((bounds.width() as usize + 1) * bounds.height() as usize);
    for y in bounds.min.y..=bounds.max.y {
        if y != bounds.min.y {
            out.push('\n');
        }
        for x in bounds.min.x..=bounds.max.x {
            let c = Coord::new(x, y);
            if probe == Some(c) {
                out.push(PROBE_GLYPH);
            } else {
                out.push(map.tag(c).glyph());
            }
        }
    }
    out
}

/// Render a dense grid: `1` for open cells, `@` for marked cells, and a
/// space for blocked cells.
pub fn render_dense(grid: &DenseGrid) -> String {
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for r in 0..grid.rows() {
        if r > 0 {
            out.push('\n');
        }
        out.extend(grid.row(r).iter().map(|&v| match v {
            OPEN => '1',
            MARKED => '@',
            _ => ' ',
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::{Cell, CellTag, GridPos};

    #[test]
    fn empty_map_renders_empty() {
        assert_eq!(render_map(&SparseGridMap::new(), None), "");
    }

    #[test]
    fn renders_tags_and_probe() {
        let mut map = SparseGridMap::new();
        map.set(Coord::new(0, -1), Cell::new(CellTag::Wall));
        map.set(Coord::new(0, 0), Cell::new(CellTag::Origin));
        map.set(Coord::new(1, 0), Cell::new(CellTag::Open));
        map.set(Coord::new(2, 0), Cell::new(CellTag::Wall));
        map.set(Coord::new(1, -1), Cell::new(CellTag::Wall));
        map.set(Coord::new(1, 1), Cell::new(CellTag::Wall));

        assert_eq!(render_map(&map, None), "## \nS.#\n # ");
        assert_eq!(
            render_map(&map, Some(Coord::new(1, 0))),
            "## \nSD#\n # "
        );
    }

    #[test]
    fn probe_outside_bounds_widens_view() {
        let mut map = SparseGridMap::new();
        map.set(Coord::new(0, 0), Cell::new(CellTag::Origin));
        assert_eq!(render_map(&map, Some(Coord::new(1, 0))), "SD");
    }

    #[test]
    fn dense_rendering_marks_path() {
        let grid = DenseGrid::from_rows(&[[1u8, 1, 0], [0, 1, 1]]).unwrap();
        let marked = grid.with_path(&[GridPos::new(0, 1), GridPos::new(1, 1)]);
        assert_eq!(render_dense(&grid), "11 \n 11");
        assert_eq!(render_dense(&marked), "1@ \n @1");
    }
}
