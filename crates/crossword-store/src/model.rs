use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crossword_core::{CrosswordResult, WordEntry};

use crate::error::StoreError;

/// Unique puzzle identifier.
pub type PuzzleId = Uuid;

/// Difficulty tier shared by bank words and puzzles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(StoreError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A word submitted to the bank, before normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub word: String,
    pub clue: String,
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub created_by: String,
}

impl NewWord {
    pub fn new(word: &str, clue: &str, difficulty: Difficulty) -> Self {
        Self {
            word: word.to_string(),
            clue: clue.to_string(),
            category: None,
            difficulty,
            created_by: String::new(),
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.created_by = author.to_string();
        self
    }
}

/// A word stored in the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankWord {
    #[serde(flatten)]
    pub entry: WordEntry,
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    /// How many generated puzzles have drawn this word.
    pub times_used: u32,
}

/// A puzzle to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPuzzle {
    pub title: String,
    pub difficulty: Difficulty,
    pub result: CrosswordResult,
    /// Publish immediately, or keep as a draft.
    pub published: bool,
}

/// A stored puzzle with its counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: PuzzleId,
    pub title: String,
    pub difficulty: Difficulty,
    pub result: CrosswordResult,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub play_count: u64,
    pub completion_count: u64,
}

impl Puzzle {
    pub fn new(puzzle: NewPuzzle) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: puzzle.title,
            difficulty: puzzle.difficulty,
            result: puzzle.result,
            created_at: now,
            published_at: puzzle.published.then_some(now),
            play_count: 0,
            completion_count: 0,
        }
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "brutal".parse::<Difficulty>(),
            Err(StoreError::UnknownDifficulty(s)) if s == "brutal"
        ));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_bank_word_json_is_flat() {
        let word = BankWord {
            entry: WordEntry::new(3, "OTTER", "river swimmer"),
            category: Some("animals".to_string()),
            difficulty: Difficulty::Easy,
            created_by: "admin".to_string(),
            created_at: Utc::now(),
            times_used: 2,
        };
        let value = serde_json::to_value(&word).unwrap();
        assert_eq!(value["word"], "OTTER");
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["timesUsed"], 2);
        let back: BankWord = serde_json::from_value(value).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn test_new_puzzle_draft_is_unpublished() {
        let draft = Puzzle::new(NewPuzzle {
            title: "Draft".to_string(),
            difficulty: Difficulty::Easy,
            result: CrosswordResult::empty(15),
            published: false,
        });
        assert!(!draft.is_published());
        assert_eq!(draft.play_count, 0);
    }
}
