use rand::RngCore;

use crossword_core::{WordEntry, WordId};

use crate::error::StoreError;
use crate::model::{BankWord, Difficulty, NewPuzzle, NewWord, Puzzle, PuzzleId};

/// Source of candidate words for puzzle generation.
pub trait WordBank {
    /// Normalise and store a word, assigning it a fresh id.
    fn add_word(&mut self, word: NewWord) -> Result<BankWord, StoreError>;

    /// All words, newest first.
    fn list_words(&self) -> Result<Vec<BankWord>, StoreError>;

    fn delete_word(&mut self, id: WordId) -> Result<(), StoreError>;

    /// Up to `count` distinct words of the given difficulty, drawn at random.
    fn sample_words(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<WordEntry>, StoreError>;

    /// Bump `times_used` on each listed word. Unknown ids are ignored.
    fn mark_used(&mut self, ids: &[WordId]) -> Result<(), StoreError>;
}

/// Persistence sink for generated puzzles.
pub trait PuzzleStore {
    fn create_puzzle(&mut self, puzzle: NewPuzzle) -> Result<Puzzle, StoreError>;

    /// A published puzzle by id. Drafts are reported as not found.
    fn get_published(&self, id: PuzzleId) -> Result<Puzzle, StoreError>;

    /// Publish a draft now. Already-published puzzles keep their original date.
    fn publish_puzzle(&mut self, id: PuzzleId) -> Result<Puzzle, StoreError>;

    /// Published puzzles, newest first.
    fn list_published(&self) -> Result<Vec<Puzzle>, StoreError>;

    /// Count one more play; returns the new total.
    fn record_play(&mut self, id: PuzzleId) -> Result<u64, StoreError>;

    /// Count one more completed solve; returns the new total.
    fn record_completion(&mut self, id: PuzzleId) -> Result<u64, StoreError>;
}
