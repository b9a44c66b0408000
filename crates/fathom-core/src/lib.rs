//! Core types for the Fathom exploration engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: coordinates and
//! directions, per-cell state, the probe wire protocol, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod protocol;

pub use cell::{Cell, CellTag};
pub use coord::{Coord, Direction, GridPos};
pub use error::{MapError, ProtocolError, SearchError};
pub use protocol::Status;
