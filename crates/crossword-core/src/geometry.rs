use serde::{Deserialize, Serialize};

/// A cell coordinate on the puzzle grid. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a signed coordinate, rejecting anything left of or above the grid.
    pub fn from_signed(row: isize, col: isize) -> Option<Self> {
        Some(Self {
            row: usize::try_from(row).ok()?,
            col: usize::try_from(col).ok()?,
        })
    }

    /// The position `offset` cells further along `orientation`.
    pub fn step(&self, orientation: Orientation, offset: usize) -> Self {
        match orientation {
            Orientation::Across => Self::new(self.row, self.col + offset),
            Orientation::Down => Self::new(self.row + offset, self.col),
        }
    }
}

/// Direction a word runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }
}

/// Iterate over the positions covered by a word of `len` letters starting at `start`.
pub fn segment(start: Position, orientation: Orientation, len: usize) -> impl Iterator<Item = Position> {
    (0..len).map(move |i| start.step(orientation, i))
}
