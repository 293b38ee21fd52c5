//! # Crossword Store
//!
//! The layer around the crossword engine: a word bank to draw candidates
//! from, a puzzle store that keeps generated puzzles with their play and
//! completion counters, and [`PuzzleService`], which validates a request,
//! samples words, runs the engine, and persists the result.
//!
//! Storage is reached only through the [`WordBank`] and [`PuzzleStore`]
//! traits. [`MemoryStore`] and [`JsonFileStore`] are the bundled backends.

pub mod error;
pub mod file;
pub mod memory;
pub mod model;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use model::{BankWord, Difficulty, NewPuzzle, NewWord, Puzzle, PuzzleId};
pub use service::{GenerateRequest, PuzzleService};
pub use store::{PuzzleStore, WordBank};
