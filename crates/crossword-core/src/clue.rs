use serde::{Deserialize, Serialize};

use crate::geometry::{Orientation, Position};
use crate::grid::Grid;

/// A numbered clue as presented to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    pub number: u32,
    pub text: String,
    pub answer: String,
    pub start_row: usize,
    pub start_col: usize,
}

impl Clue {
    pub fn start(&self) -> Position {
        Position::new(self.start_row, self.start_col)
    }

    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Output of one generation run: the filled grid and both clue lists,
/// each ordered by clue number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordResult {
    pub grid: Grid,
    pub across_clues: Vec<Clue>,
    pub down_clues: Vec<Clue>,
}

impl CrosswordResult {
    /// A result with nothing placed.
    pub fn empty(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            across_clues: Vec::new(),
            down_clues: Vec::new(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.across_clues.len() + self.down_clues.len()
    }

    /// All clues tagged with their orientation, across first.
    pub fn clues(&self) -> impl Iterator<Item = (Orientation, &Clue)> {
        self.across_clues
            .iter()
            .map(|c| (Orientation::Across, c))
            .chain(self.down_clues.iter().map(|c| (Orientation::Down, c)))
    }

    pub fn find_clue(&self, number: u32) -> Option<(Orientation, &Clue)> {
        self.clues().find(|(_, c)| c.number == number)
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(number: u32, answer: &str) -> Clue {
        Clue {
            number,
            text: format!("clue {number}"),
            answer: answer.to_string(),
            start_row: 0,
            start_col: number as usize,
        }
    }

    #[test]
    fn test_empty_result() {
        let result = CrosswordResult::empty(15);
        assert_eq!(result.word_count(), 0);
        assert_eq!(result.grid.size(), 15);
        assert_eq!(result.grid.open_cell_count(), 0);
    }

    #[test]
    fn test_find_clue_by_number() {
        let result = CrosswordResult {
            grid: Grid::new(5),
            across_clues: vec![clue(1, "OAK")],
            down_clues: vec![clue(2, "ASH"), clue(3, "ELM")],
        };
        let (orientation, found) = result.find_clue(3).unwrap();
        assert_eq!(orientation, Orientation::Down);
        assert_eq!(found.answer, "ELM");
        assert!(result.find_clue(4).is_none());
    }

    #[test]
    fn test_json_field_names() {
        let result = CrosswordResult {
            grid: Grid::new(1),
            across_clues: vec![clue(1, "A")],
            down_clues: Vec::new(),
        };
        let json = result.to_json().unwrap();
        assert!(json.contains("\"acrossClues\""));
        assert!(json.contains("\"downClues\""));
        assert!(json.contains("\"startRow\""));
        assert_eq!(CrosswordResult::from_json(&json).unwrap(), result);
    }
}
