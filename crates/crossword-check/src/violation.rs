use serde::{Deserialize, Serialize};

use crossword_core::Position;

/// Which layout rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A clue's answer runs off the grid.
    OutOfBounds,
    /// A grid cell disagrees with a clue's answer letter, or is black.
    LetterMismatch,
    /// An open cell that no clue covers.
    UncoveredCell,
    /// A clue's start cell carries no number.
    MissingNumber,
    /// A numbered cell where no clue starts.
    StrayNumber,
    /// Clue numbers are not exactly 1..=n.
    NumberSequence,
    /// A clue list is not ascending by number.
    UnsortedClues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single rule violation with an optional grid location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,
    pub position: Option<Position>,
}

impl Violation {
    pub fn error(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            position: None,
        }
    }

    pub fn warning(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(kind, message)
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}
