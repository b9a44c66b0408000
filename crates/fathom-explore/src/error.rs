//! Errors raised while exploring.

use fathom_core::{Coord, ProtocolError, Status};
use std::error::Error;
use std::fmt;

/// The command source could not complete a probe round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// The engine behind the source hung up.
    Disconnected,
    /// The source failed for a reason of its own.
    Failed {
        /// Human-readable description.
        reason: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "command source disconnected"),
            Self::Failed { reason } => write!(f, "command source failed: {reason}"),
        }
    }
}

impl Error for SourceError {}

/// Errors from an exploration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExploreError {
    /// The source answered with an unknown status code.
    Protocol(ProtocolError),
    /// The source failed to answer.
    Source(SourceError),
    /// A status contradicts what the map already records about `coord`.
    Contradiction {
        /// The cell the probe was sent toward.
        coord: Coord,
        /// The status that contradicted the map.
        status: Status,
    },
    /// The run ended without locating the target.
    TargetNotFound {
        /// Probes issued before stopping.
        probes: u64,
        /// Unknown cells still bordering discovered floor.
        frontier: usize,
    },
    /// The cancellation flag was raised between probes.
    Cancelled {
        /// Probes issued before cancellation was observed.
        probes: u64,
    },
}

impl fmt::Display for ExploreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protocol(e) => write!(f, "protocol violation: {e}"),
            Self::Source(e) => write!(f, "{e}"),
            Self::Contradiction { coord, status } => {
                write!(f, "status '{status}' contradicts the known cell at {coord}")
            }
            Self::TargetNotFound { probes, frontier } => write!(
                f,
                "target not found after {probes} probes ({frontier} frontier cells left)"
            ),
            Self::Cancelled { probes } => write!(f, "exploration cancelled after {probes} probes"),
        }
    }
}

impl Error for ExploreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Protocol(e) => Some(e),
            Self::Source(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProtocolError> for ExploreError {
    fn from(e: ProtocolError) -> Self {
        Self::Protocol(e)
    }
}

impl From<SourceError> for ExploreError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}
