//! Fathom: explore unknown grid terrain through movement probes, then
//! search and flood the discovered map.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Fathom sub-crates and adds [`survey()`], the end-to-end pipeline.
//!
//! # Quick start
//!
//! ```rust
//! use fathom::prelude::*;
//!
//! // A one-row corridor: start, two floor cells, target.
//! let row = [1, 1, 1, 2];
//! let mut x = 0usize;
//! let mut source = from_fn(move |dir| {
//!     let next = match dir {
//!         Direction::East if x + 1 < row.len() => x + 1,
//!         Direction::West if x > 0 => x - 1,
//!         _ => return Ok(0),
//!     };
//!     x = next;
//!     Ok(row[x])
//! });
//!
//! let report = survey(&mut source, &SurveyConfig::default()).unwrap();
//! assert_eq!(report.path_length(), Some(3));
//! // Flooding from the target reaches the start in three generations.
//! assert_eq!(report.diffusion.generations, 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fathom-core` | Coordinates, directions, cells, protocol, errors |
//! | [`map`] | `fathom-map` | Sparse map, densifier, rendering |
//! | [`explore`] | `fathom-explore` | Exploration controller and command sources |
//! | [`search`] | `fathom-search` | Shortest paths and diffusion |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`fathom-core`).
pub use fathom_core as types;

/// Sparse and dense maps (`fathom-map`).
///
/// [`map::SparseGridMap`] is the exploration record; [`map::densify`]
/// turns it into a [`map::DenseGrid`].
pub use fathom_map as map;

/// Online exploration (`fathom-explore`).
///
/// [`explore::Explorer`] drives a probe through any
/// [`explore::CommandSource`].
pub use fathom_explore as explore;

/// Graph algorithms over dense grids (`fathom-search`).
pub use fathom_search as search;

pub mod survey;

pub use survey::{
    survey, survey_with_cancel, DiffusionSource, SearchBackend, SurveyConfig, SurveyError,
    SurveyReport,
};

/// Common imports for typical Fathom usage.
///
/// ```rust
/// use fathom::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use fathom_core::{Cell, CellTag, Coord, Direction, GridPos, Status};

    // Errors
    pub use fathom_core::{MapError, ProtocolError, SearchError};
    pub use fathom_explore::{ConfigError, ExploreError, SourceError};

    // Maps
    pub use fathom_map::{densify, render_dense, render_map, DenseGrid, SparseGridMap};

    // Exploration
    pub use fathom_explore::{
        from_fn, ChannelSource, CommandSource, ExplorationReport, ExplorationState, Explorer,
        ExplorerConfig, Phase, TerminationPolicy,
    };

    // Search
    pub use fathom_search::{
        saturate, shortest_path, AStar, BreadthFirst, Diffusion, DiffusionReport,
        PassabilityGrid, Path, PathFinder,
    };

    // Pipeline
    pub use crate::survey::{
        survey, survey_with_cancel, DiffusionSource, SearchBackend, SurveyConfig, SurveyError,
        SurveyReport,
    };
}
