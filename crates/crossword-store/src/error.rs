use thiserror::Error;

use crossword_core::{CoreError, WordId};

use crate::model::{Difficulty, PuzzleId};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid word: {0}")]
    InvalidWord(#[from] CoreError),

    #[error("Word {0} not found")]
    WordNotFound(WordId),

    #[error("Puzzle {0} not found")]
    PuzzleNotFound(PuzzleId),

    #[error("Unknown difficulty '{0}', expected easy, medium or hard")]
    UnknownDifficulty(String),

    #[error("Not enough {difficulty} words in the word bank: found {available}, need at least {required}")]
    NotEnoughWords {
        difficulty: Difficulty,
        available: usize,
        required: usize,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
