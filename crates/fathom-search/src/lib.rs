//! Graph algorithms over discovered terrain.
//!
//! Everything here is written against the [`PassabilityGrid`] capability
//! rather than a concrete grid type, so search backends can be swapped
//! without touching exploration code.
//!
//! - [`PathFinder`]: the shortest-path service contract, with
//!   [`BreadthFirst`] and [`AStar`] backends.
//! - [`shortest_path`]: adapter that answers origin→target queries in
//!   sparse coordinates against a [`DenseGrid`](fathom_map::DenseGrid).
//! - [`Diffusion`]: generational flood fill counting ticks to saturation.
//!
//! All operations are pure functions of immutable snapshots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diffusion;
pub mod grid;
pub mod path;

pub use diffusion::{saturate, Diffusion, DiffusionReport};
pub use grid::PassabilityGrid;
pub use path::{distances, shortest_path, AStar, BreadthFirst, Path, PathFinder};
