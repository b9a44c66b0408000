//! The exploration state machine.
//!
//! Each [`Explorer::step`] is one probe round-trip:
//!
//! ```text
//!   Probing ──choose_probe──► source.probe(dir) ──status──► apply_status
//!      ▲                                                       │
//!      └──────────── Blocked / Advancing / TargetReached ◄─────┘
//! ```
//!
//! The loop ends in [`Phase::Done`] when the termination policy is met,
//! the probe is walled in, or the probe budget runs out.

use crate::config::{ConfigError, ExplorerConfig, TerminationPolicy};
use crate::error::ExploreError;
use crate::source::CommandSource;
use crate::state::{ExplorationState, Phase};
use fathom_core::{CellTag, Coord, Direction, Status};
use fathom_map::{render_map, SparseGridMap};
use std::sync::atomic::{AtomicBool, Ordering};

/// A single planned move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    /// Direction sent to the source.
    pub direction: Direction,
    /// Where the probe stands.
    pub from: Coord,
    /// The cell the probe tries to enter.
    pub to: Coord,
}

/// Result of a run that located the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorationReport {
    /// Everything discovered.
    pub map: SparseGridMap,
    /// Starting point, always [`Coord::ORIGIN`].
    pub origin: Coord,
    /// Where the target was found.
    pub target: Coord,
    /// Where the probe stopped.
    pub position: Coord,
    /// Probes issued, walls included.
    pub probes: u64,
    /// `true` if the frontier was exhausted, i.e. every reachable cell is
    /// on the map.
    pub complete: bool,
}

impl ExplorationReport {
    /// Render the map with the probe's final position overlaid.
    pub fn render(&self) -> String {
        render_map(&self.map, Some(self.position))
    }
}

impl TryFrom<ExplorationState> for ExplorationReport {
    type Error = ExploreError;

    /// Fails with [`ExploreError::TargetNotFound`] if the state never
    /// located the target.
    fn try_from(state: ExplorationState) -> Result<Self, Self::Error> {
        let complete = state.is_frontier_exhausted();
        match state.target {
            Some(target) => Ok(Self {
                origin: Coord::ORIGIN,
                target,
                position: state.position,
                probes: state.probes,
                complete,
                map: state.map,
            }),
            None => Err(ExploreError::TargetNotFound {
                probes: state.probes,
                frontier: state.frontier.len(),
            }),
        }
    }
}

/// Drives a probe through unknown terrain.
#[derive(Clone, Debug, Default)]
pub struct Explorer {
    config: ExplorerConfig,
}

impl Explorer {
    /// Create an explorer after validating `config`.
    pub fn new(config: ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Pick the least-visited neighbour that is not a known wall.
    ///
    /// Unknown cells rank as unvisited. Ties go to the earlier entry of
    /// the configured direction priority. Returns `None` when all four
    /// neighbours are walls.
    pub fn choose_probe(&self, state: &ExplorationState) -> Option<Probe> {
        let from = state.position;
        self.config
            .direction_priority
            .iter()
            .map(|&direction| (direction, from.step(direction)))
            .map(|(direction, to)| (direction, to, state.map.get(to)))
            .filter(|(_, _, cell)| cell.tag != CellTag::Wall)
            // min_by_key keeps the first of equal keys.
            .min_by_key(|(_, _, cell)| cell.visit_count)
            .map(|(direction, to, _)| Probe {
                direction,
                from,
                to,
            })
    }

    /// Fold one status into `state` and return the resulting phase.
    ///
    /// `probe` must have been planned from `state`'s current position.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::Contradiction`] if a wall is reported for a
    /// known passable cell, a move into a known wall, or a second target
    /// somewhere other than the first.
    pub fn apply_status(
        &self,
        state: &mut ExplorationState,
        probe: Probe,
        status: Status,
    ) -> Result<Phase, ExploreError> {
        state.probes += 1;
        let known = state.map.tag(probe.to);
        let contradiction = ExploreError::Contradiction {
            coord: probe.to,
            status,
        };
        let phase = match status {
            Status::Wall => {
                if known.is_passable() {
                    return Err(contradiction);
                }
                state.discover_wall(probe.to);
                log::debug!("probe {}: wall at {}", state.probes, probe.to);
                Phase::Blocked
            }
            Status::Moved | Status::FoundTarget => {
                if known == CellTag::Wall {
                    return Err(contradiction);
                }
                let found = status == Status::FoundTarget;
                if found && state.target.is_some_and(|t| t != probe.to) {
                    return Err(contradiction);
                }
                // Walls are excluded above, so this keeps Origin and Target.
                let tag = if known.is_sticky() {
                    known
                } else if found {
                    CellTag::Target
                } else {
                    CellTag::Open
                };
                state.map.visit(probe.from);
                state.map.retag(probe.to, tag);
                state.map.visit(probe.to);
                state.position = probe.to;
                state.discover_floor(probe.to);
                log::debug!(
                    "probe {}: moved {} to {}",
                    state.probes,
                    probe.direction,
                    probe.to
                );
                if found {
                    self.record_target(state, probe.to);
                    Phase::TargetReached
                } else {
                    Phase::Advancing
                }
            }
        };
        state.phase = phase;
        Ok(phase)
    }

    fn record_target(&self, state: &mut ExplorationState, at: Coord) {
        if state.target.is_none() {
            state.target = Some(at);
            state.probes_at_target = Some(state.probes);
            log::info!("target found at {} after {} probes", at, state.probes);
        }
    }

    /// Returns `true` once the termination policy is satisfied.
    pub fn is_complete(&self, state: &ExplorationState) -> bool {
        match self.config.termination {
            TerminationPolicy::FrontierExhausted => state.is_frontier_exhausted(),
            TerminationPolicy::ProbesAfterTarget(n) => {
                state.probes_since_target().is_some_and(|since| since >= n)
            }
        }
    }

    /// Perform one probe round-trip.
    ///
    /// Once `state` is [`Phase::Done`] this returns immediately without
    /// touching the source.
    ///
    /// # Errors
    ///
    /// Source failures, unknown status codes and contradictions are all
    /// fatal.
    pub fn step<S: CommandSource + ?Sized>(
        &self,
        state: &mut ExplorationState,
        source: &mut S,
    ) -> Result<Phase, ExploreError> {
        if state.phase == Phase::Done {
            return Ok(Phase::Done);
        }
        if self.is_complete(state) {
            state.phase = Phase::Done;
            return Ok(Phase::Done);
        }
        state.phase = Phase::Probing;
        let Some(probe) = self.choose_probe(state) else {
            log::debug!("probe walled in at {}", state.position);
            state.phase = Phase::Done;
            return Ok(Phase::Done);
        };
        let code = source.probe(probe.direction)?;
        let status = Status::try_from(code)?;
        self.apply_status(state, probe, status)
    }

    /// Step `state` until it is [`Phase::Done`] or the probe budget is
    /// spent, checking `cancel` between round-trips.
    ///
    /// # Errors
    ///
    /// [`ExploreError::Cancelled`] if `cancel` was raised, plus anything
    /// [`step`](Self::step) returns. `state` keeps everything learned up
    /// to the failure.
    pub fn drive<S: CommandSource + ?Sized>(
        &self,
        state: &mut ExplorationState,
        source: &mut S,
        cancel: &AtomicBool,
    ) -> Result<(), ExploreError> {
        loop {
            if cancel.load(Ordering::Acquire) {
                log::info!("exploration cancelled after {} probes", state.probes);
                return Err(ExploreError::Cancelled {
                    probes: state.probes,
                });
            }
            if state.probes >= self.config.max_probes {
                log::warn!(
                    "probe budget of {} spent with {} frontier cells left",
                    self.config.max_probes,
                    state.frontier_len()
                );
                state.phase = Phase::Done;
                break;
            }
            if self.step(state, source)? == Phase::Done {
                break;
            }
        }
        if state.is_frontier_exhausted() {
            log::info!(
                "exploration finished: {} cells known after {} probes",
                state.map.len(),
                state.probes
            );
        } else {
            log::warn!(
                "exploration ended with {} frontier cells unexplored",
                state.frontier_len()
            );
        }
        Ok(())
    }

    /// Explore from a fresh state until done.
    ///
    /// # Errors
    ///
    /// [`ExploreError::TargetNotFound`] if the run ended without finding
    /// the target, or any fatal error from [`step`](Self::step).
    pub fn run<S: CommandSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<ExplorationReport, ExploreError> {
        self.run_with_cancel(source, &AtomicBool::new(false))
    }

    /// [`run`](Self::run), checking `cancel` between probe round-trips.
    pub fn run_with_cancel<S: CommandSource + ?Sized>(
        &self,
        source: &mut S,
        cancel: &AtomicBool,
    ) -> Result<ExplorationReport, ExploreError> {
        let mut state = ExplorationState::new();
        self.drive(&mut state, source, cancel)?;
        ExplorationReport::try_from(state)
    }
}
