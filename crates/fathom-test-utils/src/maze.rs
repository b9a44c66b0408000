//! Ground-truth mazes drawn in ASCII.

use fathom_core::{Coord, Direction, Status};
use fathom_explore::{CommandSource, SourceError};
use std::collections::{HashMap, HashSet, VecDeque};

/// A maze the explorer cannot see.
///
/// `#` is wall, `S` the start, `T` the target, `.` floor. Spaces and
/// everything outside the drawing are walls. Coordinates are shifted so
/// `S` sits on [`Coord::ORIGIN`], matching the explorer's frame.
#[derive(Clone, Debug)]
pub struct HiddenMaze {
    floor: HashSet<Coord>,
    target: Option<Coord>,
    position: Coord,
    probes: u64,
    sent: Vec<Direction>,
}

impl HiddenMaze {
    /// Parse a drawing. Panics if it has no `S`.
    pub fn parse(text: &str) -> Self {
        let mut floor = HashSet::new();
        let mut start = None;
        let mut target = None;
        for (y, line) in text.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let c = Coord::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    'S' => start = Some(c),
                    'T' => target = Some(c),
                    _ => continue,
                }
                floor.insert(c);
            }
        }
        let start = start.expect("maze drawing has no 'S'");
        let shift = |c: Coord| Coord::new(c.x - start.x, c.y - start.y);
        Self {
            floor: floor.into_iter().map(shift).collect(),
            target: target.map(shift),
            position: Coord::ORIGIN,
            probes: 0,
            sent: Vec::new(),
        }
    }

    /// Where the maze's probe currently stands.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// The hidden target, if the drawing has one.
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    /// Probes answered so far.
    pub fn probes(&self) -> u64 {
        self.probes
    }

    /// Every direction received, in order.
    pub fn sent(&self) -> &[Direction] {
        &self.sent
    }

    /// Returns `true` unless `c` is floor.
    pub fn is_wall(&self, c: Coord) -> bool {
        !self.floor.contains(&c)
    }

    /// Floor cells reachable from the start, `S` included.
    pub fn reachable(&self) -> HashSet<Coord> {
        self.distances_from(Coord::ORIGIN).into_keys().collect()
    }

    /// Walls 4-adjacent to reachable floor: the walls a complete
    /// exploration must classify.
    pub fn bordering_walls(&self) -> HashSet<Coord> {
        self.reachable()
            .into_iter()
            .flat_map(|c| c.neighbours())
            .map(|(_, nb)| nb)
            .filter(|&nb| self.is_wall(nb))
            .collect()
    }

    /// Shortest step count between two floor cells, by breadth-first
    /// search over the ground truth.
    pub fn distance(&self, from: Coord, to: Coord) -> Option<u32> {
        self.distances_from(from).get(&to).copied()
    }

    /// Largest shortest-path distance from `from` to any reachable cell.
    pub fn eccentricity(&self, from: Coord) -> u32 {
        self.distances_from(from).into_values().max().unwrap_or(0)
    }

    fn distances_from(&self, from: Coord) -> HashMap<Coord, u32> {
        let mut dist = HashMap::new();
        if self.is_wall(from) {
            return dist;
        }
        dist.insert(from, 0);
        let mut queue = VecDeque::from([from]);
        while let Some(c) = queue.pop_front() {
            let d = dist[&c];
            for (_, nb) in c.neighbours() {
                if !self.is_wall(nb) && !dist.contains_key(&nb) {
                    dist.insert(nb, d + 1);
                    queue.push_back(nb);
                }
            }
        }
        dist
    }
}

impl CommandSource for HiddenMaze {
    fn probe(&mut self, direction: Direction) -> Result<i64, SourceError> {
        self.probes += 1;
        self.sent.push(direction);
        let next = self.position.step(direction);
        let status = if self.is_wall(next) {
            Status::Wall
        } else {
            self.position = next;
            if Some(next) == self.target {
                Status::FoundTarget
            } else {
                Status::Moved
            }
        };
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#####
#S.T#
##.##
#####";

    #[test]
    fn start_is_recentred_on_origin() {
        let maze = HiddenMaze::parse(SMALL);
        assert!(!maze.is_wall(Coord::ORIGIN));
        assert_eq!(maze.target(), Some(Coord::new(2, 0)));
        assert_eq!(maze.reachable().len(), 4);
        assert_eq!(maze.bordering_walls().len(), 8);
    }

    #[test]
    fn probes_follow_the_drawing() {
        let mut maze = HiddenMaze::parse(SMALL);
        assert_eq!(maze.probe(Direction::North), Ok(0));
        assert_eq!(maze.probe(Direction::East), Ok(1));
        assert_eq!(maze.probe(Direction::East), Ok(2));
        assert_eq!(maze.position(), Coord::new(2, 0));
        assert_eq!(maze.probes(), 3);
    }

    #[test]
    fn ground_truth_distances() {
        let maze = HiddenMaze::parse(SMALL);
        assert_eq!(maze.distance(Coord::ORIGIN, Coord::new(2, 0)), Some(2));
        assert_eq!(maze.eccentricity(Coord::new(2, 0)), 2);
        assert_eq!(maze.distance(Coord::ORIGIN, Coord::new(9, 9)), None);
    }
}
