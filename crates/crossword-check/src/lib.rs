//! # Crossword Check
//!
//! Layout rule checking for generated puzzles. Each rule inspects a
//! [`CrosswordResult`](crossword_core::CrosswordResult) and reports
//! violations as data; nothing here fails or mutates the puzzle.

pub mod rules;
pub mod violation;

pub use rules::{check, CheckReport};
pub use violation::{Severity, Violation, ViolationKind};
