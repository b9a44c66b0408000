//! Generational diffusion (flood fill) over open cells.
//!
//! A substance starts in one source cell and, every generation, spreads
//! into each open 4-neighbour of every saturated cell. All transitions of a
//! generation are computed from the state at the start of that generation,
//! so one generation is exactly one unit of spread distance and the final
//! generation count equals the source's eccentricity over the open-cell
//! subgraph.
//!
//! Only cells saturated in the previous generation can have open
//! neighbours left, so each generation scans that wavefront rather than
//! the whole grid. The result is identical to rescanning every saturated
//! cell.

use crate::grid::PassabilityGrid;
use fathom_core::{GridPos, SearchError};
use fathom_map::{BLOCKED, MARKED, OPEN};
use smallvec::SmallVec;

/// Summary of a finished diffusion run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffusionReport {
    /// Generations needed until nothing reachable remained open.
    pub generations: u32,
    /// Saturated cells at the end, including the source.
    pub saturated: usize,
    /// Open cells that were never reached (isolated pockets).
    pub unreached: usize,
}

/// A diffusion simulation in progress.
///
/// Owns a working copy of the grid's passability; the input grid is
/// never modified.
#[derive(Clone, Debug)]
pub struct Diffusion {
    rows: usize,
    cols: usize,
    state: Vec<u8>,
    wavefront: Vec<GridPos>,
    generation: u32,
    saturated: usize,
}

impl Diffusion {
    /// Seed a simulation with `source` saturated at generation 0.
    ///
    /// # Errors
    ///
    /// Returns `Err(SearchError::OutOfBounds)` if `source` lies outside the
    /// grid, or `Err(SearchError::Blocked)` if it is not passable.
    pub fn new(grid: &dyn PassabilityGrid, source: GridPos) -> Result<Self, SearchError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if source.row >= rows || source.col >= cols {
            return Err(SearchError::OutOfBounds { pos: source });
        }
        if !grid.is_passable(source) {
            return Err(SearchError::Blocked { pos: source });
        }
        let mut state = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let open = grid.is_passable(GridPos::new(row, col));
                state.push(if open { OPEN } else { BLOCKED });
            }
        }
        state[source.row * cols + source.col] = MARKED;
        Ok(Self {
            rows,
            cols,
            state,
            wavefront: vec![source],
            generation: 0,
            saturated: 1,
        })
    }

    /// Generations completed so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of saturated cells, including the source.
    pub fn saturated(&self) -> usize {
        self.saturated
    }

    /// Returns `true` once no further generation can saturate anything.
    pub fn is_settled(&self) -> bool {
        self.wavefront.is_empty()
    }

    /// Returns `true` if `pos` has been saturated.
    pub fn is_saturated(&self, pos: GridPos) -> bool {
        self.value(pos) == Some(MARKED)
    }

    /// Working-grid value at `pos`: [`BLOCKED`], [`OPEN`] or [`MARKED`].
    pub fn value(&self, pos: GridPos) -> Option<u8> {
        (pos.row < self.rows && pos.col < self.cols)
            .then(|| self.state[pos.row * self.cols + pos.col])
    }

    /// Row-major working-grid values.
    pub fn state(&self) -> &[u8] {
        &self.state
    }

    /// Positions saturated so far, row-major.
    pub fn saturated_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let cols = self.cols;
        self.state
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == MARKED)
            .map(move |(i, _)| GridPos::new(i / cols, i % cols))
    }

    /// Consume the simulation, returning the working grid as rows of
    /// [`BLOCKED`], [`OPEN`] and [`MARKED`] values.
    pub fn into_grid(self) -> Vec<Vec<u8>> {
        self.state.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }

    /// Advance one generation. Returns how many cells it saturated.
    ///
    /// A generation that saturates nothing is not counted.
    pub fn step(&mut self) -> usize {
        let wavefront = std::mem::take(&mut self.wavefront);
        let mut next = Vec::new();
        for &pos in &wavefront {
            let spread: SmallVec<[GridPos; 4]> = self.open_neighbours(pos).collect();
            for nb in spread {
                // Marked immediately so a cell shared by two wavefront
                // cells is queued once; it cannot spread further until
                // the next call.
                self.state[nb.row * self.cols + nb.col] = MARKED;
                next.push(nb);
            }
        }
        self.wavefront = next;
        let spread = self.wavefront.len();
        if spread > 0 {
            self.generation += 1;
            self.saturated += spread;
            log::trace!(
                "diffusion generation {}: {} new, {} saturated",
                self.generation,
                spread,
                self.saturated
            );
        }
        spread
    }

    /// Run to completion.
    pub fn run(&mut self) -> DiffusionReport {
        while self.step() > 0 {}
        let report = DiffusionReport {
            generations: self.generation,
            saturated: self.saturated,
            unreached: self.state.iter().filter(|&&v| v == OPEN).count(),
        };
        log::debug!(
            "diffusion settled after {} generations ({} saturated, {} unreached)",
            report.generations,
            report.saturated,
            report.unreached
        );
        report
    }

    fn open_neighbours(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        let candidates = [
            pos.row.checked_sub(1).map(|r| GridPos::new(r, pos.col)),
            (pos.row + 1 < self.rows).then(|| GridPos::new(pos.row + 1, pos.col)),
            pos.col.checked_sub(1).map(|c| GridPos::new(pos.row, c)),
            (pos.col + 1 < self.cols).then(|| GridPos::new(pos.row, pos.col + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(move |nb| self.state[nb.row * self.cols + nb.col] == OPEN)
    }
}

/// Run a diffusion from `source` to completion.
///
/// # Errors
///
/// See [`Diffusion::new`].
pub fn saturate(
    grid: &dyn PassabilityGrid,
    source: GridPos,
) -> Result<DiffusionReport, SearchError> {
    Ok(Diffusion::new(grid, source)?.run())
}
