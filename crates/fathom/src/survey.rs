//! End-to-end pipeline: explore, densify, find the path, flood.

use fathom_core::{Coord, MapError, SearchError};
use fathom_explore::{
    CommandSource, ConfigError, ExplorationReport, ExploreError, Explorer, ExplorerConfig,
};
use fathom_map::{densify, render_dense, render_map, DenseGrid};
use fathom_search::{saturate, shortest_path, AStar, BreadthFirst, DiffusionReport, Path, PathFinder};
use std::error::Error;
use std::fmt;
use std::sync::atomic::AtomicBool;

// ── Configuration ──────────────────────────────────────────────────

/// Where the diffusion starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiffusionSource {
    /// The discovered target.
    #[default]
    Target,
    /// The exploration origin.
    Origin,
    /// Any discovered passable cell.
    At(Coord),
}

/// Shortest-path backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchBackend {
    /// A* with a Manhattan heuristic.
    #[default]
    AStar,
    /// Plain breadth-first search.
    BreadthFirst,
}

impl SearchBackend {
    fn finder(self) -> &'static dyn PathFinder {
        match self {
            SearchBackend::AStar => &AStar,
            SearchBackend::BreadthFirst => &BreadthFirst,
        }
    }
}

/// Configuration for [`survey`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Exploration settings.
    pub explorer: ExplorerConfig,
    /// Where to seed the diffusion. Default: the target.
    pub diffusion_source: DiffusionSource,
    /// Path search backend. Default: A*.
    pub backend: SearchBackend,
}

impl SurveyConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.explorer.validate()
    }
}

// ── SurveyError ────────────────────────────────────────────────────

/// Errors from any stage of [`survey`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// Exploration failed or ended without the target.
    Explore(ExploreError),
    /// The discovered map could not be densified.
    Map(MapError),
    /// A path or diffusion endpoint was invalid.
    Search(SearchError),
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid survey config: {e}"),
            Self::Explore(e) => write!(f, "exploration failed: {e}"),
            Self::Map(e) => write!(f, "map conversion failed: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
        }
    }
}

impl Error for SurveyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Explore(e) => Some(e),
            Self::Map(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SurveyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ExploreError> for SurveyError {
    fn from(e: ExploreError) -> Self {
        Self::Explore(e)
    }
}

impl From<MapError> for SurveyError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<SearchError> for SurveyError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ── SurveyReport ───────────────────────────────────────────────────

/// Everything a survey produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyReport {
    /// The exploration outcome, including the sparse map.
    pub exploration: ExplorationReport,
    /// Dense snapshot of the discovered map.
    pub grid: DenseGrid,
    /// Shortest origin→target path, `None` if unreachable.
    pub path: Option<Path>,
    /// Where the diffusion was seeded.
    pub diffusion_source: Coord,
    /// Diffusion outcome.
    pub diffusion: DiffusionReport,
}

impl SurveyReport {
    /// Moves on the shortest origin→target path.
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(Path::len)
    }

    /// The discovered map with the probe's final position.
    pub fn render_map(&self) -> String {
        render_map(&self.exploration.map, Some(self.exploration.position))
    }

    /// The dense grid with the shortest path overlaid as `@`.
    pub fn render_path(&self) -> String {
        match &self.path {
            Some(path) => render_dense(&self.grid.with_path(path.steps())),
            None => render_dense(&self.grid),
        }
    }
}

// ── Pipeline ───────────────────────────────────────────────────────

/// Explore through `source`, then answer both questions about the map:
/// the shortest origin→target path and the diffusion generation count.
///
/// # Errors
///
/// See [`SurveyError`]. An unreachable target is not an error; it shows
/// up as `path: None`.
pub fn survey<S: CommandSource + ?Sized>(
    source: &mut S,
    config: &SurveyConfig,
) -> Result<SurveyReport, SurveyError> {
    survey_with_cancel(source, config, &AtomicBool::new(false))
}

/// [`survey`], checking `cancel` between probe round-trips.
pub fn survey_with_cancel<S: CommandSource + ?Sized>(
    source: &mut S,
    config: &SurveyConfig,
    cancel: &AtomicBool,
) -> Result<SurveyReport, SurveyError> {
    config.validate()?;
    let explorer = Explorer::new(config.explorer.clone())?;
    let exploration = explorer.run_with_cancel(source, cancel)?;
    let grid = densify(&exploration.map)?;

    let path = shortest_path(
        &grid,
        exploration.origin,
        exploration.target,
        config.backend.finder(),
    )?;

    let seed = match config.diffusion_source {
        DiffusionSource::Target => exploration.target,
        DiffusionSource::Origin => exploration.origin,
        DiffusionSource::At(coord) => coord,
    };
    let local = grid
        .to_local(seed)
        .ok_or(SearchError::CoordOutOfBounds { coord: seed })?;
    let diffusion = saturate(&grid, local)?;

    log::info!(
        "survey: {} probes, path length {:?}, diffusion from {} took {} generations",
        exploration.probes,
        path.as_ref().map(Path::len),
        seed,
        diffusion.generations
    );
    Ok(SurveyReport {
        exploration,
        grid,
        path,
        diffusion_source: seed,
        diffusion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_explore::from_fn;

    #[test]
    fn invalid_config_fails_before_probing() {
        let config = SurveyConfig {
            explorer: ExplorerConfig {
                max_probes: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut source = from_fn(|_| -> Result<i64, fathom_explore::SourceError> {
            panic!("probed with invalid config")
        });
        assert_eq!(
            survey(&mut source, &config),
            Err(SurveyError::Config(ConfigError::ZeroProbeBudget))
        );
    }

    #[test]
    fn explore_errors_are_wrapped() {
        let mut source = from_fn(|_| Ok(9));
        let err = survey(&mut source, &SurveyConfig::default()).unwrap_err();
        assert!(matches!(err, SurveyError::Explore(ExploreError::Protocol(_))));
        assert!(err.source().is_some());
    }

    #[test]
    fn backends_are_distinct() {
        assert_eq!(SearchBackend::AStar.finder().name(), AStar.name());
        assert_eq!(
            SearchBackend::BreadthFirst.finder().name(),
            BreadthFirst.name()
        );
    }
}
