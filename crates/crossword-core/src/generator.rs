use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::clue::{Clue, CrosswordResult};
use crate::geometry::{Orientation, Position};
use crate::grid::Grid;
use crate::word::WordEntry;

/// Side length used when the caller does not pick one.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Only this many words (after sorting by length) are ever attempted.
pub const MAX_WORDS: usize = 20;

/// Tunables for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid side length.
    pub size: usize,
    /// Processing cap on the sorted word list.
    pub max_words: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            max_words: MAX_WORDS,
        }
    }
}

impl GeneratorConfig {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

/// A word committed to the grid. `row`/`col` locate its first letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: WordEntry,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub number: u32,
}

impl PlacedWord {
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn to_clue(&self) -> Clue {
        Clue {
            number: self.number,
            text: self.word.clue.clone(),
            answer: self.word.word.clone(),
            start_row: self.row,
            start_col: self.col,
        }
    }
}

/// First-fit crossword layout engine.
///
/// Words are sorted longest first. The first one that fits is laid across
/// the middle row, and each later word takes the first letter it shares with
/// an already-placed word, running perpendicular to that word. There is no
/// backtracking: a word that finds no spot is dropped for good.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Lay out `words` and build the numbered clue lists.
    pub fn generate(&self, words: &[WordEntry]) -> CrosswordResult {
        let (grid, placed) = self.layout(words);
        assemble(grid, &placed)
    }

    /// Run placement only, returning the grid and placements in the order
    /// they were committed.
    pub fn layout(&self, words: &[WordEntry]) -> (Grid, Vec<PlacedWord>) {
        let mut ordered: Vec<&WordEntry> = words.iter().collect();
        // Stable, so equal lengths keep their input order.
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut grid = Grid::new(self.config.size);
        let mut placed: Vec<PlacedWord> = Vec::new();

        for entry in ordered.into_iter().take(self.config.max_words) {
            let letters = entry.letters();
            let spot = if placed.is_empty() {
                anchor_spot(&grid, &letters)
            } else {
                intersection_spot(&grid, &placed, &letters)
            };

            let Some((start, orientation)) = spot else {
                debug!("Dropped '{}': no valid placement", entry.word);
                continue;
            };

            let number = placed.len() as u32 + 1;
            grid.place(&letters, start, orientation);
            grid.set_number(start, number);
            debug!(
                "Placed '{}' as {} {:?} at ({}, {})",
                entry.word, number, orientation, start.row, start.col
            );
            placed.push(PlacedWord {
                word: entry.clone(),
                row: start.row,
                col: start.col,
                orientation,
                number,
            });
        }

        info!(
            "Placed {} of {} words on a {}x{} grid",
            placed.len(),
            words.len(),
            self.config.size,
            self.config.size
        );
        (grid, placed)
    }
}

/// Generate with the default word cap on a `size` x `size` grid.
pub fn generate(words: &[WordEntry], size: usize) -> CrosswordResult {
    Generator::new(GeneratorConfig::with_size(size)).generate(words)
}

/// Centre the first word across the middle row.
fn anchor_spot(grid: &Grid, letters: &[char]) -> Option<(Position, Orientation)> {
    let size = grid.size();
    if letters.is_empty() || letters.len() > size {
        return None;
    }
    let start = Position::new(size / 2, (size - letters.len()) / 2);
    grid.can_place(letters, start, Orientation::Across)
        .then_some((start, Orientation::Across))
}

/// Scan placed words (oldest first) and their letters against the candidate's
/// letters; the first shared letter that yields a valid spot wins.
fn intersection_spot(
    grid: &Grid,
    placed: &[PlacedWord],
    letters: &[char],
) -> Option<(Position, Orientation)> {
    for existing in placed {
        let orientation = existing.orientation.perpendicular();
        let (row, col) = (existing.row as isize, existing.col as isize);

        for (j, shared) in existing.word.letters().into_iter().enumerate() {
            for (k, &letter) in letters.iter().enumerate() {
                if letter != shared {
                    continue;
                }
                let (j, k) = (j as isize, k as isize);
                let (new_row, new_col) = match existing.orientation {
                    Orientation::Down => (row + j, col - k),
                    Orientation::Across => (row - k, col + j),
                };
                let Some(start) = Position::from_signed(new_row, new_col) else {
                    continue;
                };
                if grid.can_place(letters, start, orientation) {
                    return Some((start, orientation));
                }
            }
        }
    }
    None
}

fn assemble(grid: Grid, placed: &[PlacedWord]) -> CrosswordResult {
    let mut across_clues = Vec::new();
    let mut down_clues = Vec::new();
    for word in placed {
        match word.orientation {
            Orientation::Across => across_clues.push(word.to_clue()),
            Orientation::Down => down_clues.push(word.to_clue()),
        }
    }
    across_clues.sort_by_key(|c| c.number);
    down_clues.sort_by_key(|c| c.number);

    CrosswordResult {
        grid,
        across_clues,
        down_clues,
    }
}
