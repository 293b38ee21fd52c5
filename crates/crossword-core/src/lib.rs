//! # Crossword Core
//!
//! Layout engine for the crossword puzzle feature: takes a bank of
//! `(word, clue)` entries, lays them onto a square grid by intersecting
//! shared letters, numbers each placed word, and emits across/down clue lists.
//!
//! The engine is pure and synchronous. Every call owns its grid and
//! placement list, so concurrent generations share no state.

pub mod clue;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod word;

pub use clue::{Clue, CrosswordResult};
pub use error::CoreError;
pub use generator::{generate, Generator, GeneratorConfig, PlacedWord, DEFAULT_GRID_SIZE, MAX_WORDS};
pub use geometry::{Orientation, Position};
pub use grid::{Grid, GridCell};
pub use word::{WordEntry, WordId};
