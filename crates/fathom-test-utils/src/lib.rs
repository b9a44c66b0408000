//! Test utilities and mock command sources for Fathom development.
//!
//! - [`HiddenMaze`] answers probes from an ASCII drawing and knows the
//!   ground truth, so tests can check what the explorer discovered.
//! - [`ScriptedSource`] replays a fixed list of status codes.
//! - [`random_maze`] and [`random_cave`] generate seeded layouts.
//! - [`spawn_maze_engine`] serves a maze from another thread over a
//!   [`ChannelSource`](fathom_explore::ChannelSource).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod generate;
pub mod maze;
pub mod scripted;

pub use engine::spawn_maze_engine;
pub use generate::{random_cave, random_maze};
pub use maze::HiddenMaze;
pub use scripted::ScriptedSource;
