//! Explorer configuration and validation.

use fathom_core::Direction;
use std::error::Error;
use std::fmt;

// ── TerminationPolicy ──────────────────────────────────────────────

/// When the explorer declares the map complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationPolicy {
    /// Stop once no unknown cell borders discovered floor: every
    /// reachable cell has been probed in all four directions.
    FrontierExhausted,
    /// Stop once this many probes have been issued after the target was
    /// found. Cheap, but may leave reachable regions undiscovered.
    ProbesAfterTarget(u64),
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ExplorerConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_probes` is zero.
    ZeroProbeBudget,
    /// `direction_priority` lists a direction more than once.
    DuplicateDirection {
        /// The repeated direction.
        direction: Direction,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroProbeBudget => write!(f, "max_probes must be at least 1"),
            Self::DuplicateDirection { direction } => {
                write!(f, "direction_priority lists {direction} more than once")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ExplorerConfig ─────────────────────────────────────────────────

/// Configuration for an [`Explorer`](crate::Explorer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// When to stop exploring. Default: [`TerminationPolicy::FrontierExhausted`].
    pub termination: TerminationPolicy,
    /// Hard cap on probes per run, whatever the policy. Default: 100 000.
    pub max_probes: u64,
    /// Tie-break order among equally visited neighbours.
    /// Default: north, east, south, west.
    pub direction_priority: [Direction; 4],
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            termination: TerminationPolicy::FrontierExhausted,
            max_probes: 100_000,
            direction_priority: [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ],
        }
    }
}

impl ExplorerConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_probes == 0 {
            return Err(ConfigError::ZeroProbeBudget);
        }
        // Four entries, no repeats: a permutation of the compass.
        for (i, &dir) in self.direction_priority.iter().enumerate() {
            if self.direction_priority[..i].contains(&dir) {
                return Err(ConfigError::DuplicateDirection { direction: dir });
            }
        }
        Ok(())
    }
}
