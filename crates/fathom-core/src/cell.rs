//! Per-cell exploration state.

/// What is known about a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellTag {
    /// Never observed. Implicit value of every unwritten coordinate.
    #[default]
    Unknown,
    /// Traversable floor.
    Open,
    /// Impassable. Permanent once recorded.
    Wall,
    /// The cell where exploration started.
    Origin,
    /// The designated goal cell reported by the probe.
    Target,
    /// Filled by the diffusion process.
    Saturated,
}

impl CellTag {
    /// Returns `true` for tags that can be walked through.
    ///
    /// `Unknown` is not passable: only discovered cells carry meaningful
    /// state.
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            CellTag::Open | CellTag::Origin | CellTag::Target | CellTag::Saturated
        )
    }

    /// Returns `true` for tags the controller must never overwrite.
    pub fn is_sticky(self) -> bool {
        matches!(self, CellTag::Wall | CellTag::Origin | CellTag::Target)
    }

    /// Single-character glyph used by text renderings.
    pub fn glyph(self) -> char {
        match self {
            CellTag::Unknown => ' ',
            CellTag::Open => '.',
            CellTag::Wall => '#',
            CellTag::Origin => 'S',
            CellTag::Target => 'T',
            CellTag::Saturated => 'O',
        }
    }
}

/// A stored cell: its tag plus how often the probe has settled on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// What is known about the cell.
    pub tag: CellTag,
    /// Number of times the probe arrived at or departed from this cell.
    pub visit_count: u32,
}

impl Cell {
    /// A cell with the given tag and zero visits.
    pub const fn new(tag: CellTag) -> Self {
        Self {
            tag,
            visit_count: 0,
        }
    }

    /// A cell with the given tag and visit count.
    pub const fn with_visits(tag: CellTag, visit_count: u32) -> Self {
        Self { tag, visit_count }
    }

    /// Shorthand for `self.tag.is_passable()`.
    pub fn is_passable(&self) -> bool {
        self.tag.is_passable()
    }
}
