use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geometry::{segment, Orientation, Position};

/// One square of the puzzle. A fresh cell is black: no letter, no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    #[serde(with = "letter_field")]
    pub letter: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub is_black: bool,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            letter: None,
            number: None,
            is_black: true,
        }
    }
}

/// Black cells go over the wire with `letter: ""`.
mod letter_field {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(letter: &Option<char>, s: S) -> Result<S::Ok, S::Error> {
        match letter {
            Some(c) => s.collect_str(c),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<char>, D::Error> {
        let raw = String::deserialize(d)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(c), None) => Ok(Some(c)),
            _ => Err(D::Error::custom(format!(
                "expected at most one letter per cell, got '{raw}'"
            ))),
        }
    }
}

/// Square puzzle grid, stored row-major. The side length is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<GridCell>>", into = "Vec<Vec<GridCell>>")]
pub struct Grid {
    size: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    /// An all-black grid of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![GridCell::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<&GridCell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut GridCell> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    pub fn row(&self, row: usize) -> &[GridCell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        (0..self.size).map(move |r| self.row(r))
    }

    /// Iterate over every cell together with its position.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &GridCell)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / size, i % size), cell))
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_black).count()
    }

    /// Whether a word of `len` letters starting at `start` stays on the grid.
    pub fn fits(&self, start: Position, orientation: Orientation, len: usize) -> bool {
        let (fixed, running) = match orientation {
            Orientation::Across => (start.row, start.col),
            Orientation::Down => (start.col, start.row),
        };
        fixed < self.size && running.checked_add(len).is_some_and(|end| end <= self.size)
    }

    /// Whether `letters` can be written from `start`: in bounds, and every
    /// open cell it crosses already holds the same letter.
    pub fn can_place(&self, letters: &[char], start: Position, orientation: Orientation) -> bool {
        if !self.fits(start, orientation, letters.len()) {
            return false;
        }
        segment(start, orientation, letters.len())
            .zip(letters)
            .all(|(pos, &letter)| match self.get(pos) {
                Some(cell) if !cell.is_black => cell.letter.map_or(true, |l| l == letter),
                Some(_) => true,
                None => false,
            })
    }

    /// Write `letters` from `start`, opening the cells. Existing numbers are kept.
    /// Callers check `can_place` first; cells off the grid are skipped.
    pub fn place(&mut self, letters: &[char], start: Position, orientation: Orientation) {
        for (pos, &letter) in segment(start, orientation, letters.len()).zip(letters) {
            if let Some(cell) = self.get_mut(pos) {
                cell.letter = Some(letter);
                cell.is_black = false;
            }
        }
    }

    /// Put a clue number on a cell, replacing any number already there.
    pub fn set_number(&mut self, pos: Position, number: u32) {
        if let Some(cell) = self.get_mut(pos) {
            cell.number = Some(number);
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.size && pos.col < self.size {
            Some(pos.row * self.size + pos.col)
        } else {
            None
        }
    }
}

impl TryFrom<Vec<Vec<GridCell>>> for Grid {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<GridCell>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != size {
                return Err(CoreError::NotSquare {
                    row,
                    len: cols.len(),
                    expected: size,
                });
            }
            cells.extend(cols);
        }
        Ok(Self { size, cells })
    }
}

impl From<Grid> for Vec<Vec<GridCell>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match (cell.is_black, cell.letter) {
                    (false, Some(c)) => c.to_string(),
                    _ => "#".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
