//! Error types shared across the Fathom workspace.
//!
//! Organized by subsystem: probe protocol, map densification, and grid
//! search. Exploration-level errors live in `fathom-explore`.

use crate::coord::{Coord, GridPos};
use std::error::Error;
use std::fmt;

/// The command source broke the probe protocol.
///
/// Always fatal: the map's consistency cannot be guaranteed past a
/// protocol violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// A status code outside `0..=2` was returned.
    UnknownStatus {
        /// The offending code.
        code: i64,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStatus { code } => write!(f, "unknown probe status code {code}"),
        }
    }
}

impl Error for ProtocolError {}

/// Errors from converting a sparse map into a dense grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Nothing has been discovered, so there is no rectangle to densify.
    EmptyMap,
    /// The bounding rectangle is too large to allocate as a dense grid.
    TooLarge {
        /// Rows spanned by the stored coordinates.
        rows: u64,
        /// Columns spanned by the stored coordinates.
        cols: u64,
    },
    /// Rows supplied to a dense grid constructor differ in length.
    Ragged {
        /// Index of the first mismatched row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the mismatched row.
        found: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "cannot densify an empty map"),
            Self::TooLarge { rows, cols } => {
                write!(f, "map bounds {rows}x{cols} are too large to densify")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl Error for MapError {}

/// Errors from path and diffusion queries against a dense grid.
///
/// An unreachable target is *not* an error; queries report it as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A sparse coordinate lies outside the dense grid's rectangle.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
    },
    /// A grid position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: GridPos,
    },
    /// A query endpoint lies on a blocked cell.
    Blocked {
        /// The offending position.
        pos: GridPos,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord } => {
                write!(f, "coordinate {coord} is outside the grid")
            }
            Self::OutOfBounds { pos } => write!(f, "position {pos} is outside the grid"),
            Self::Blocked { pos } => write!(f, "position {pos} is blocked"),
        }
    }
}

impl Error for SearchError {}
