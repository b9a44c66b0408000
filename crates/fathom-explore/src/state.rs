//! Mutable state of one exploration run.

use fathom_core::{Cell, CellTag, Coord};
use fathom_map::SparseGridMap;
use indexmap::IndexSet;
use std::fmt;

/// Outcome of the most recent controller step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Choosing the next probe.
    #[default]
    Probing,
    /// The last probe hit a wall.
    Blocked,
    /// The last probe moved onto floor.
    Advancing,
    /// The last probe moved onto the target.
    TargetReached,
    /// Exploration is over; further steps are no-ops.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Probing => "probing",
            Phase::Blocked => "blocked",
            Phase::Advancing => "advancing",
            Phase::TargetReached => "target-reached",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything the explorer knows mid-run.
///
/// The frontier is the set of unknown coordinates 4-adjacent to a known
/// passable cell, kept in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorationState {
    pub(crate) map: SparseGridMap,
    pub(crate) position: Coord,
    pub(crate) target: Option<Coord>,
    pub(crate) probes: u64,
    pub(crate) probes_at_target: Option<u64>,
    pub(crate) phase: Phase,
    pub(crate) frontier: IndexSet<Coord>,
}

impl Default for ExplorationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorationState {
    /// Fresh state: the probe stands on [`Coord::ORIGIN`], the only known
    /// cell, with its four neighbours on the frontier.
    pub fn new() -> Self {
        let mut map = SparseGridMap::new();
        map.set(Coord::ORIGIN, Cell::new(CellTag::Origin));
        let frontier = Coord::ORIGIN
            .neighbours()
            .iter()
            .map(|&(_, c)| c)
            .collect();
        Self {
            map,
            position: Coord::ORIGIN,
            target: None,
            probes: 0,
            probes_at_target: None,
            phase: Phase::Probing,
            frontier,
        }
    }

    /// The discovered map.
    pub fn map(&self) -> &SparseGridMap {
        &self.map
    }

    /// Consume the state, keeping only the map.
    pub fn into_map(self) -> SparseGridMap {
        self.map
    }

    /// Where the probe currently stands.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// The target, once found.
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    /// Probes issued so far, walls included.
    pub fn probes(&self) -> u64 {
        self.probes
    }

    /// Probes issued since the target was first found.
    pub fn probes_since_target(&self) -> Option<u64> {
        self.probes_at_target.map(|at| self.probes - at)
    }

    /// Outcome of the last step.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Unknown cells bordering discovered floor, in discovery order.
    pub fn frontier(&self) -> impl Iterator<Item = Coord> + '_ {
        self.frontier.iter().copied()
    }

    /// Number of frontier cells.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns `true` once every reachable cell has been classified.
    pub fn is_frontier_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Record that the probe now stands on `coord`, moving the frontier
    /// past it.
    pub(crate) fn discover_floor(&mut self, coord: Coord) {
        self.frontier.shift_remove(&coord);
        for (_, nb) in coord.neighbours() {
            if self.map.tag(nb) == CellTag::Unknown {
                self.frontier.insert(nb);
            }
        }
    }

    /// Record a wall at `coord`.
    pub(crate) fn discover_wall(&mut self, coord: Coord) {
        self.map.retag(coord, CellTag::Wall);
        self.frontier.shift_remove(&coord);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_stands_on_origin() {
        let state = ExplorationState::new();
        assert_eq!(state.position(), Coord::ORIGIN);
        assert_eq!(state.map().tag(Coord::ORIGIN), CellTag::Origin);
        assert_eq!(state.map().len(), 1);
        assert_eq!(state.phase(), Phase::Probing);
        assert_eq!(state.target(), None);
        assert_eq!(state.frontier_len(), 4);
    }

    #[test]
    fn walls_leave_the_frontier() {
        let mut state = ExplorationState::new();
        let north = Coord::new(0, -1);
        state.discover_wall(north);
        assert_eq!(state.map().tag(north), CellTag::Wall);
        assert!(!state.frontier().any(|c| c == north));
        assert_eq!(state.frontier_len(), 3);
    }

    #[test]
    fn floor_pushes_the_frontier_outward() {
        let mut state = ExplorationState::new();
        let east = Coord::new(1, 0);
        state.map.retag(east, CellTag::Open);
        state.discover_floor(east);
        // Origin is known, so only three new neighbours join.
        let frontier: Vec<Coord> = state.frontier().collect();
        assert!(!frontier.contains(&east));
        assert!(!frontier.contains(&Coord::ORIGIN));
        assert!(frontier.contains(&Coord::new(2, 0)));
        assert_eq!(state.frontier_len(), 3 + 3);
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::TargetReached.to_string(), "target-reached");
        assert_eq!(Phase::default(), Phase::Probing);
    }
}
