//! Map storage for Fathom.
//!
//! [`SparseGridMap`] is the single source of truth while the probe is
//! exploring: an unbounded coordinate store that only grows as cells are
//! written. [`densify`] snapshots it into a bounded [`DenseGrid`] for the
//! search algorithms. Dense grids are disposable; nothing written into one
//! ever flows back into the sparse map.
//!
//! # Rendering
//!
//! [`render_map`] and [`render_dense`] produce the diagnostic text views.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod render;
pub mod sparse;

pub use dense::{densify, DenseGrid, BLOCKED, MARKED, MAX_CELLS, OPEN};
pub use render::{render_dense, render_map};
pub use sparse::{Bounds, SparseGridMap};
