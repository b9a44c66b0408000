//! Online exploration of unknown terrain.
//!
//! The [`Explorer`] drives a single probe through a grid it cannot see. Each
//! round-trip sends one [`Direction`](fathom_core::Direction) to a
//! [`CommandSource`] and folds the returned status into an
//! [`ExplorationState`], which owns the discovered
//! [`SparseGridMap`](fathom_map::SparseGridMap).
//!
//! # Decision rule
//!
//! The probe always moves toward the least-visited non-wall neighbour,
//! ties broken by a fixed direction priority. Unknown neighbours count as
//! unvisited, so the probe is drawn to the frontier without explicit
//! backtracking bookkeeping.
//!
//! # Termination
//!
//! By default the run ends when the frontier (unknown cells adjacent to
//! discovered floor) is empty. See [`TerminationPolicy`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod source;
pub mod state;

pub use config::{ConfigError, ExplorerConfig, TerminationPolicy};
pub use controller::{ExplorationReport, Explorer, Probe};
pub use error::{ExploreError, SourceError};
pub use source::{from_fn, ChannelSource, CommandSource, EngineEnd, FnSource};
pub use state::{ExplorationState, Phase};
