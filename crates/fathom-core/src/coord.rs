//! Coordinates, compass directions and dense-grid positions.

use std::fmt;

/// A cell address on the unbounded exploration plane.
///
/// `y` grows southward: [`Direction::North`] is `y - 1`. This matches the
/// row order used when maps are rendered top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column (east is positive).
    pub x: i32,
    /// Row (south is positive).
    pub y: i32,
}

impl Coord {
    /// The fixed starting point of every exploration run.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four 4-connected neighbours, in [`Direction::ALL`] order.
    pub fn neighbours(self) -> [(Direction, Coord); 4] {
        Direction::ALL.map(|dir| (dir, self.step(dir)))
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Key that sorts coordinates row-major: by `y`, then by `x`.
    pub fn row_major_key(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A movement direction understood by the probe.
///
/// The discriminants are the wire codes sent to the command source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Move one cell north (`y - 1`).
    North = 1,
    /// Move one cell south (`y + 1`).
    South = 2,
    /// Move one cell west (`x - 1`).
    West = 3,
    /// Move one cell east (`x + 1`).
    East = 4,
}

impl Direction {
    /// All directions in wire-code order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Wire code sent to the command source.
    pub fn code(self) -> i64 {
        self as u8 as i64
    }

    /// Decode a wire code. Returns `None` for anything outside `1..=4`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Direction::North),
            2 => Some(Direction::South),
            3 => Some(Direction::West),
            4 => Some(Direction::East),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}

/// A position inside a dense grid: zero-based `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl GridPos {
    /// Create a grid position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: GridPos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}
