//! Shortest-path service contract, backends, and the sparse-coordinate
//! adapter.

use crate::grid::PassabilityGrid;
use fathom_core::{Coord, GridPos, SearchError};
use fathom_map::DenseGrid;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Marker for "no predecessor" in the flat parent tables.
const NONE: usize = usize::MAX;

/// A shortest-path service over a passability grid.
///
/// # Contract
///
/// - Returns the cells *after* `from` up to and including `to`, each
///   4-adjacent to the previous one; the sequence length is the hop count.
/// - The sequence has minimum length among all such paths.
/// - Identical grid and endpoints always produce the identical sequence.
/// - Returns `None` if `to` cannot be reached or either endpoint is not
///   passable. Never panics on unreachable targets.
/// - `from == to` on a passable cell yields `Some(vec![])`.
pub trait PathFinder {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Find a minimum-length path from `from` to `to`.
    fn find_path(
        &self,
        grid: &dyn PassabilityGrid,
        from: GridPos,
        to: GridPos,
    ) -> Option<Vec<GridPos>>;
}

/// Walk the parent table back from `to` and return the forward path,
/// excluding `from`.
fn unwind(grid: &dyn PassabilityGrid, parent: &[usize], from: usize, to: usize) -> Vec<GridPos> {
    let cols = grid.cols();
    let mut path = Vec::new();
    let mut at = to;
    while at != from {
        path.push(GridPos::new(at / cols, at % cols));
        at = parent[at];
    }
    path.reverse();
    path
}

/// Uniform-cost breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl PathFinder for BreadthFirst {
    fn name(&self) -> &str {
        "BreadthFirst"
    }

    fn find_path(
        &self,
        grid: &dyn PassabilityGrid,
        from: GridPos,
        to: GridPos,
    ) -> Option<Vec<GridPos>> {
        if !grid.is_passable(from) || !grid.is_passable(to) {
            return None;
        }
        let start = grid.flat(from);
        let goal = grid.flat(to);
        let mut parent = vec![NONE; grid.cell_count()];
        parent[start] = start;
        let mut queue = VecDeque::from([from]);

        while let Some(pos) = queue.pop_front() {
            let i = grid.flat(pos);
            if i == goal {
                return Some(unwind(grid, &parent, start, goal));
            }
            for nb in grid.neighbours(pos) {
                let j = grid.flat(nb);
                if parent[j] == NONE {
                    parent[j] = i;
                    queue.push_back(nb);
                }
            }
        }
        None
    }
}

/// A* with the Manhattan heuristic.
///
/// The heuristic is consistent on a unit-cost 4-connected grid, so the
/// first expansion of the goal is optimal. Ties on `f` are broken by
/// smaller `h`, then by flat index, which keeps results deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

impl PathFinder for AStar {
    fn name(&self) -> &str {
        "AStar"
    }

    fn find_path(
        &self,
        grid: &dyn PassabilityGrid,
        from: GridPos,
        to: GridPos,
    ) -> Option<Vec<GridPos>> {
        if !grid.is_passable(from) || !grid.is_passable(to) {
            return None;
        }
        let n = grid.cell_count();
        let start = grid.flat(from);
        let goal = grid.flat(to);
        let mut g = vec![usize::MAX; n];
        let mut parent = vec![NONE; n];
        let mut closed = vec![false; n];
        let mut open = BinaryHeap::new();

        g[start] = 0;
        parent[start] = start;
        let h0 = from.manhattan(to);
        open.push(Reverse((h0, h0, start)));

        while let Some(Reverse((_, _, i))) = open.pop() {
            if closed[i] {
                continue;
            }
            if i == goal {
                return Some(unwind(grid, &parent, start, goal));
            }
            closed[i] = true;
            let pos = GridPos::new(i / grid.cols(), i % grid.cols());
            let next_g = g[i] + 1;
            for nb in grid.neighbours(pos) {
                let j = grid.flat(nb);
                if closed[j] || next_g >= g[j] {
                    continue;
                }
                g[j] = next_g;
                parent[j] = i;
                let h = nb.manhattan(to);
                open.push(Reverse((next_g + h, h, j)));
            }
        }
        None
    }
}

/// A path between two discovered cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    steps: Vec<GridPos>,
    cells: Vec<Coord>,
}

impl Path {
    /// Number of moves from origin to target.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if origin and target coincide.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cells visited after the origin, in sparse coordinates. The last
    /// entry is the target.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// The same cells as grid-local positions, for overlaying onto the
    /// dense grid the path was computed on.
    pub fn steps(&self) -> &[GridPos] {
        &self.steps
    }
}

/// Answer an origin→target query in sparse coordinates.
///
/// Both endpoints are translated into grid-local positions through the
/// grid's offset, the search is delegated to `finder`, and the result is
/// translated back.
///
/// Returns `Ok(None)` when the target is walled off from the origin.
///
/// # Errors
///
/// Returns `Err(SearchError::CoordOutOfBounds)` if either endpoint lies
/// outside the grid, or `Err(SearchError::Blocked)` if either endpoint is
/// not passable.
pub fn shortest_path(
    grid: &DenseGrid,
    origin: Coord,
    target: Coord,
    finder: &dyn PathFinder,
) -> Result<Option<Path>, SearchError> {
    let locate = |coord: Coord| -> Result<GridPos, SearchError> {
        let pos = grid
            .to_local(coord)
            .ok_or(SearchError::CoordOutOfBounds { coord })?;
        if !grid.is_passable(pos) {
            return Err(SearchError::Blocked { pos });
        }
        Ok(pos)
    };
    let from = locate(origin)?;
    let to = locate(target)?;

    let Some(steps) = finder.find_path(grid, from, to) else {
        log::debug!("{}: no path from {origin} to {target}", finder.name());
        return Ok(None);
    };
    let cells = steps.iter().map(|&p| grid.to_global(p)).collect();
    log::debug!(
        "{}: path from {origin} to {target} has {} steps",
        finder.name(),
        steps.len()
    );
    Ok(Some(Path { steps, cells }))
}

/// Breadth-first hop distance from `source` to every cell.
///
/// Entry `i` (row-major) is `None` for cells that are blocked or cannot be
/// reached. The source itself is `Some(0)` when passable; a blocked
/// source yields all `None`.
pub fn distances(grid: &dyn PassabilityGrid, source: GridPos) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.cell_count()];
    if !grid.is_passable(source) {
        return dist;
    }
    dist[grid.flat(source)] = Some(0);
    let mut queue = VecDeque::from([(source, 0u32)]);
    while let Some((pos, d)) = queue.pop_front() {
        for nb in grid.neighbours(pos) {
            let j = grid.flat(nb);
            if dist[j].is_none() {
                dist[j] = Some(d + 1);
                queue.push_back((nb, d + 1));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(row: usize, col: usize) -> GridPos {
        GridPos::new(row, col)
    }

    fn finders() -> [&'static dyn PathFinder; 2] {
        [&BreadthFirst, &AStar]
    }

    fn assert_valid_path(grid: &dyn PassabilityGrid, from: GridPos, path: &[GridPos]) {
        let mut at = from;
        for &step in path {
            assert!(grid.is_passable(step), "{step} is not passable");
            assert_eq!(at.manhattan(step), 1, "{at} -> {step} is not one hop");
            at = step;
        }
    }

    #[test]
    fn three_row_layout_needs_three_hops() {
        let grid = DenseGrid::from_rows(&[[1u8, 1, 1, 1], [0, 1, 1, 0], [0, 0, 1, 1]]).unwrap();
        for finder in finders() {
            let path = finder.find_path(&grid, p(0, 0), p(1, 2)).unwrap();
            assert_eq!(path.len(), 3, "{}", finder.name());
            assert_eq!(path.last(), Some(&p(1, 2)));
            assert_valid_path(&grid, p(0, 0), &path);
        }
    }

    #[test]
    fn square_layout_needs_two_hops() {
        let grid =
            DenseGrid::from_rows(&[[0u8, 1, 1, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]])
                .unwrap();
        for finder in finders() {
            let path = finder.find_path(&grid, p(1, 1), p(0, 2)).unwrap();
            assert_eq!(path.len(), 2, "{}", finder.name());
        }
    }

    #[test]
    fn bent_corridor_to_knight_move_target() {
        // Only corridor from [0,0] to [2,3]: right along row 0, then down.
        let grid =
            DenseGrid::from_rows(&[[1u8, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 0]])
                .unwrap();
        for finder in finders() {
            let path = finder.find_path(&grid, p(0, 0), p(2, 3)).unwrap();
            assert_eq!(path.len(), 5, "{}", finder.name());
            assert_valid_path(&grid, p(0, 0), &path);
        }
    }

    #[test]
    fn straight_corridor_of_four_is_three_steps() {
        let grid = DenseGrid::from_rows(&[[0u8, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]).unwrap();
        for finder in finders() {
            let path = finder.find_path(&grid, p(1, 0), p(1, 3)).unwrap();
            assert_eq!(path, vec![p(1, 1), p(1, 2), p(1, 3)], "{}", finder.name());
        }
    }

    #[test]
    fn wall_row_makes_target_unreachable() {
        let grid = DenseGrid::from_rows(&[[1u8, 1, 1], [0, 0, 0], [1, 1, 1]]).unwrap();
        for finder in finders() {
            assert_eq!(finder.find_path(&grid, p(0, 0), p(2, 2)), None);
        }
    }

    #[test]
    fn same_cell_is_empty_path() {
        let grid = DenseGrid::from_rows(&[[1u8]]).unwrap();
        for finder in finders() {
            assert_eq!(finder.find_path(&grid, p(0, 0), p(0, 0)), Some(vec![]));
        }
    }

    #[test]
    fn blocked_or_outside_endpoints_yield_none() {
        let grid = DenseGrid::from_rows(&[[1u8, 0]]).unwrap();
        for finder in finders() {
            assert_eq!(finder.find_path(&grid, p(0, 0), p(0, 1)), None);
            assert_eq!(finder.find_path(&grid, p(0, 0), p(5, 5)), None);
        }
    }

    #[test]
    fn adapter_translates_through_offset() {
        use fathom_core::{Cell, CellTag};
        use fathom_map::{densify, SparseGridMap};

        let mut map = SparseGridMap::new();
        map.set(Coord::new(0, 0), Cell::new(CellTag::Origin));
        map.set(Coord::new(-1, 0), Cell::new(CellTag::Open));
        map.set(Coord::new(-1, 1), Cell::new(CellTag::Target));
        map.set(Coord::new(0, 1), Cell::new(CellTag::Wall));
        let grid = densify(&map).unwrap();

        let path = shortest_path(&grid, Coord::ORIGIN, Coord::new(-1, 1), &AStar)
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.cells(), &[Coord::new(-1, 0), Coord::new(-1, 1)]);
        assert_eq!(path.steps(), &[p(0, 0), p(1, 0)]);
    }

    #[test]
    fn adapter_reports_bad_endpoints() {
        let grid = DenseGrid::from_rows(&[[1u8, 0]]).unwrap();
        assert_eq!(
            shortest_path(&grid, Coord::ORIGIN, Coord::new(4, 0), &BreadthFirst),
            Err(SearchError::CoordOutOfBounds {
                coord: Coord::new(4, 0)
            })
        );
        assert_eq!(
            shortest_path(&grid, Coord::ORIGIN, Coord::new(1, 0), &BreadthFirst),
            Err(SearchError::Blocked { pos: p(0, 1) })
        );
    }

    #[test]
    fn adapter_unreachable_is_ok_none() {
        let grid = DenseGrid::from_rows(&[[1u8, 0, 1]]).unwrap();
        assert_eq!(
            shortest_path(&grid, Coord::ORIGIN, Coord::new(2, 0), &BreadthFirst),
            Ok(None)
        );
    }

    #[test]
    fn distances_from_corner() {
        let grid = DenseGrid::from_rows(&[[1u8, 1], [0, 1]]).unwrap();
        assert_eq!(
            distances(&grid, p(0, 0)),
            vec![Some(0), Some(1), None, Some(2)]
        );
        assert_eq!(distances(&grid, p(1, 0)), vec![None; 4]);
    }

    fn arb_grid() -> impl Strategy<Value = (usize, Vec<bool>)> {
        (2usize..9, 2usize..9).prop_flat_map(|(rows, cols)| {
            (
                Just(cols),
                prop::collection::vec(prop::bool::weighted(0.7), rows * cols),
            )
        })
    }

    proptest! {
        #[test]
        fn astar_and_bfs_agree_on_length(
            (cols, open) in arb_grid(),
            a in 0usize..64,
            b in 0usize..64,
        ) {
            let rows: Vec<Vec<bool>> = open.chunks(cols).map(|r| r.to_vec()).collect();
            let n = open.len();
            let from = GridPos::new((a % n) / cols, (a % n) % cols);
            let to = GridPos::new((b % n) / cols, (b % n) % cols);

            let bfs = BreadthFirst.find_path(&rows, from, to);
            let astar = AStar.find_path(&rows, from, to);
            prop_assert_eq!(bfs.as_ref().map(Vec::len), astar.as_ref().map(Vec::len));

            let dist = distances(&rows, from)[to.row * cols + to.col];
            prop_assert_eq!(bfs.as_ref().map(|p| p.len() as u32), dist);
            if let Some(path) = astar {
                assert_valid_path(&rows, from, &path);
            }
        }

        #[test]
        fn search_is_deterministic(
            (cols, open) in arb_grid(),
            a in 0usize..64,
            b in 0usize..64,
        ) {
            let rows: Vec<Vec<bool>> = open.chunks(cols).map(|r| r.to_vec()).collect();
            let n = open.len();
            let from = GridPos::new((a % n) / cols, (a % n) % cols);
            let to = GridPos::new((b % n) / cols, (b % n) % cols);
            for finder in finders() {
                prop_assert_eq!(
                    finder.find_path(&rows, from, to),
                    finder.find_path(&rows, from, to)
                );
            }
        }
    }
}
