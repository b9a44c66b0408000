//! Benchmark profiles for the Fathom exploration engine.
//!
//! - [`maze_profile`]: a fully explored perfect maze, as its sparse map.
//! - [`grid_profile`]: the same maze densified, with origin and target.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fathom_core::Coord;
use fathom_explore::{ExplorationReport, Explorer};
use fathom_map::{densify, DenseGrid};
use fathom_test_utils::{random_maze, HiddenMaze};

/// Explore a seeded `w` × `h`-room maze to completion.
///
/// Panics if the maze has no reachable target, which a perfect maze of
/// more than one room never lacks.
pub fn maze_profile(seed: u64, w: usize, h: usize) -> ExplorationReport {
    let mut maze = HiddenMaze::parse(&random_maze(seed, w, h));
    Explorer::default()
        .run(&mut maze)
        .expect("perfect maze exploration failed")
}

/// [`maze_profile`] densified: `(grid, origin, target)`.
pub fn grid_profile(seed: u64, w: usize, h: usize) -> (DenseGrid, Coord, Coord) {
    let report = maze_profile(seed, w, h);
    let grid = densify(&report.map).expect("explored map is never empty");
    (grid, report.origin, report.target)
}
