//! A maze served from its own thread, the way an external program would
//! answer probes.

use crate::maze::HiddenMaze;
use fathom_core::Direction;
use fathom_explore::{ChannelSource, CommandSource};
use std::thread::{self, JoinHandle};

/// Spawn a thread that answers probes against `maze`.
///
/// The thread exits, handing the maze back, when the source is dropped or
/// an invalid direction code arrives.
pub fn spawn_maze_engine(mut maze: HiddenMaze) -> (ChannelSource, JoinHandle<HiddenMaze>) {
    let (source, engine) = ChannelSource::pair();
    let handle = thread::spawn(move || {
        for code in engine.commands.iter() {
            let Some(direction) = Direction::from_code(code) else {
                break;
            };
            let Ok(status) = maze.probe(direction) else {
                break;
            };
            if engine.statuses.send(status).is_err() {
                break;
            }
        }
        maze
    });
    (source, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::Coord;

    #[test]
    fn engine_thread_answers_and_returns_maze() {
        let maze = HiddenMaze::parse("#S.T#");
        let (mut source, handle) = spawn_maze_engine(maze);
        assert_eq!(source.probe(Direction::East), Ok(1));
        assert_eq!(source.probe(Direction::East), Ok(2));
        drop(source);
        let maze = handle.join().unwrap();
        assert_eq!(maze.position(), Coord::new(2, 0));
        assert_eq!(maze.probes(), 2);
    }
}
