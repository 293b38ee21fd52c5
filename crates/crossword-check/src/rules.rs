use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crossword_core::geometry::segment;
use crossword_core::{Clue, CrosswordResult, Position};

use crate::violation::{Severity, Violation, ViolationKind};

/// Everything the rules found for one puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// No error-level violations. Warnings are allowed.
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
    }

    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run every layout rule against `result`.
pub fn check(result: &CrosswordResult) -> CheckReport {
    let mut violations = Vec::new();
    check_cells(result, &mut violations);
    check_numbering(result, &mut violations);
    check_ordering("across", &result.across_clues, &mut violations);
    check_ordering("down", &result.down_clues, &mut violations);

    debug!(
        "Checked {} clues on a {}x{} grid: {} violation(s)",
        result.word_count(),
        result.grid.size(),
        result.grid.size(),
        violations.len()
    );
    CheckReport { violations }
}

/// Every answer must sit on open cells holding its letters, every open
/// cell must belong to some answer, and numbers appear only where answers start.
fn check_cells(result: &CrosswordResult, out: &mut Vec<Violation>) {
    let grid = &result.grid;
    let mut covered: HashSet<Position> = HashSet::new();
    let starts: HashSet<Position> = result.clues().map(|(_, c)| c.start()).collect();

    for (orientation, clue) in result.clues() {
        let start = clue.start();
        if !grid.fits(start, orientation, clue.len()) {
            out.push(
                Violation::error(
                    ViolationKind::OutOfBounds,
                    format!("{} {:?} '{}' runs off the grid", clue.number, orientation, clue.answer),
                )
                .at(start),
            );
            continue;
        }

        for (pos, letter) in segment(start, orientation, clue.len()).zip(clue.answer.chars()) {
            covered.insert(pos);
            let Some(cell) = grid.get(pos) else { continue };
            if cell.is_black || cell.letter != Some(letter) {
                out.push(
                    Violation::error(
                        ViolationKind::LetterMismatch,
                        format!(
                            "{} {:?} expects '{}' at ({}, {}), found {}",
                            clue.number,
                            orientation,
                            letter,
                            pos.row,
                            pos.col,
                            describe(cell.is_black, cell.letter)
                        ),
                    )
                    .at(pos),
                );
            }
        }

        if grid.get(start).is_some_and(|c| c.number.is_none()) {
            out.push(
                Violation::error(
                    ViolationKind::MissingNumber,
                    format!("Start cell of clue {} has no number", clue.number),
                )
                .at(start),
            );
        }
    }

    for (pos, cell) in grid.cells() {
        if !cell.is_black && !covered.contains(&pos) {
            out.push(
                Violation::error(
                    ViolationKind::UncoveredCell,
                    format!("Open cell ({}, {}) belongs to no clue", pos.row, pos.col),
                )
                .at(pos),
            );
        }
        if let Some(number) = cell.number.filter(|_| !starts.contains(&pos)) {
            out.push(
                Violation::warning(
                    ViolationKind::StrayNumber,
                    format!("Cell ({}, {}) is numbered {number} but starts no clue", pos.row, pos.col),
                )
                .at(pos),
            );
        }
    }
}

fn describe(is_black: bool, letter: Option<char>) -> String {
    match (is_black, letter) {
        (true, _) => "a black cell".to_string(),
        (false, Some(c)) => format!("'{c}'"),
        (false, None) => "an empty cell".to_string(),
    }
}

/// Clue numbers across both lists form 1..=n with no repeats.
fn check_numbering(result: &CrosswordResult, out: &mut Vec<Violation>) {
    let mut numbers: Vec<u32> = result.clues().map(|(_, c)| c.number).collect();
    numbers.sort_unstable();

    for pair in numbers.windows(2) {
        if pair[0] == pair[1] {
            out.push(Violation::error(
                ViolationKind::NumberSequence,
                format!("Clue number {} is used more than once", pair[0]),
            ));
        }
    }

    numbers.dedup();
    let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
    if numbers != expected {
        out.push(Violation::error(
            ViolationKind::NumberSequence,
            format!("Clue numbers {numbers:?} do not run from 1 without gaps"),
        ));
    }
}

fn check_ordering(list: &str, clues: &[Clue], out: &mut Vec<Violation>) {
    if clues.windows(2).any(|w| w[0].number > w[1].number) {
        out.push(Violation::warning(
            ViolationKind::UnsortedClues,
            format!("The {list} clues are not in ascending order"),
        ));
    }
}
