use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Word is empty")]
    EmptyWord,

    #[error("Word '{word}' contains non-letter character '{found}'")]
    NonLetter { word: String, found: char },

    #[error("Grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
}
