use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a word in the word bank.
pub type WordId = u64;

/// A candidate answer and its clue, as handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub word: String,
    pub clue: String,
}

impl WordEntry {
    /// Build an entry as-is. The engine trusts its input, so nothing is checked here.
    pub fn new(id: WordId, word: &str, clue: &str) -> Self {
        Self {
            id,
            word: word.to_string(),
            clue: clue.to_string(),
        }
    }

    /// Build an entry from user input: trims and uppercases the word and
    /// rejects anything that is not made purely of letters.
    pub fn normalized(id: WordId, word: &str, clue: &str) -> Result<Self, CoreError> {
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return Err(CoreError::EmptyWord);
        }
        if let Some(found) = word.chars().find(|c| !c.is_alphabetic()) {
            return Err(CoreError::NonLetter { word, found });
        }
        Ok(Self {
            id,
            word,
            clue: clue.trim().to_string(),
        })
    }

    /// Letters of the answer, in order.
    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }

    /// Length in letters (not bytes).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}
