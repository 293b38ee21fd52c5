use std::collections::HashSet;

use chrono::Utc;
use log::debug;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crossword_core::{WordEntry, WordId};

use crate::error::StoreError;
use crate::model::{BankWord, Difficulty, NewPuzzle, NewWord, Puzzle, PuzzleId};
use crate::store::{PuzzleStore, WordBank};

/// Word bank and puzzle store held in memory. Also the on-disk document
/// shape used by [`JsonFileStore`](crate::JsonFileStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStore {
    words: Vec<BankWord>,
    puzzles: Vec<Puzzle>,
    /// Last id handed out; ids are never reused after a delete.
    last_word_id: WordId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn puzzle_count(&self) -> usize {
        self.puzzles.len()
    }

    fn puzzle_mut(&mut self, id: PuzzleId) -> Result<&mut Puzzle, StoreError> {
        self.puzzles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PuzzleNotFound(id))
    }
}

impl WordBank for MemoryStore {
    fn add_word(&mut self, word: NewWord) -> Result<BankWord, StoreError> {
        let entry = WordEntry::normalized(self.last_word_id + 1, &word.word, &word.clue)?;
        self.last_word_id = entry.id;

        let stored = BankWord {
            entry,
            category: word.category.filter(|c| !c.trim().is_empty()),
            difficulty: word.difficulty,
            created_by: word.created_by,
            created_at: Utc::now(),
            times_used: 0,
        };
        debug!("Added word {} '{}'", stored.entry.id, stored.entry.word);
        self.words.push(stored.clone());
        Ok(stored)
    }

    fn list_words(&self) -> Result<Vec<BankWord>, StoreError> {
        let mut words: Vec<BankWord> = self.words.iter().rev().cloned().collect();
        words.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(words)
    }

    fn delete_word(&mut self, id: WordId) -> Result<(), StoreError> {
        let index = self
            .words
            .iter()
            .position(|w| w.entry.id == id)
            .ok_or(StoreError::WordNotFound(id))?;
        self.words.remove(index);
        Ok(())
    }

    fn sample_words(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<WordEntry>, StoreError> {
        let pool: Vec<&BankWord> = self
            .words
            .iter()
            .filter(|w| w.difficulty == difficulty)
            .collect();
        let sample: Vec<WordEntry> = pool
            .choose_multiple(rng, count)
            .map(|w| w.entry.clone())
            .collect();
        debug!(
            "Sampled {} of {} {} words",
            sample.len(),
            pool.len(),
            difficulty
        );
        Ok(sample)
    }

    fn mark_used(&mut self, ids: &[WordId]) -> Result<(), StoreError> {
        let ids: HashSet<WordId> = ids.iter().copied().collect();
        for word in self.words.iter_mut().filter(|w| ids.contains(&w.entry.id)) {
            word.times_used += 1;
        }
        Ok(())
    }
}

impl PuzzleStore for MemoryStore {
    fn create_puzzle(&mut self, puzzle: NewPuzzle) -> Result<Puzzle, StoreError> {
        let stored = Puzzle::new(puzzle);
        debug!("Stored puzzle {} '{}'", stored.id, stored.title);
        self.puzzles.push(stored.clone());
        Ok(stored)
    }

    fn get_published(&self, id: PuzzleId) -> Result<Puzzle, StoreError> {
        self.puzzles
            .iter()
            .find(|p| p.id == id && p.is_published())
            .cloned()
            .ok_or(StoreError::PuzzleNotFound(id))
    }

    fn publish_puzzle(&mut self, id: PuzzleId) -> Result<Puzzle, StoreError> {
        let puzzle = self.puzzle_mut(id)?;
        if puzzle.published_at.is_none() {
            puzzle.published_at = Some(Utc::now());
            debug!("Published puzzle {}", puzzle.id);
        }
        Ok(puzzle.clone())
    }

    fn list_published(&self) -> Result<Vec<Puzzle>, StoreError> {
        let mut puzzles: Vec<Puzzle> = self
            .puzzles
            .iter()
            .rev()
            .filter(|p| p.is_published())
            .cloned()
            .collect();
        puzzles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(puzzles)
    }

    fn record_play(&mut self, id: PuzzleId) -> Result<u64, StoreError> {
        let puzzle = self.puzzle_mut(id)?;
        puzzle.play_count += 1;
        Ok(puzzle.play_count)
    }

    fn record_completion(&mut self, id: PuzzleId) -> Result<u64, StoreError> {
        let puzzle = self.puzzle_mut(id)?;
        puzzle.completion_count += 1;
        Ok(puzzle.completion_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossword_core::{CoreError, CrosswordResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_bank() -> MemoryStore {
        let mut store = MemoryStore::new();
        for (word, difficulty) in [
            ("apple", Difficulty::Easy),
            ("bread", Difficulty::Easy),
            ("cider", Difficulty::Easy),
            ("quasar", Difficulty::Hard),
            ("zephyr", Difficulty::Hard),
        ] {
            store
                .add_word(NewWord::new(word, &format!("clue for {word}"), difficulty))
                .unwrap();
        }
        store
    }

    fn draft(title: &str, published: bool) -> NewPuzzle {
        NewPuzzle {
            title: title.to_string(),
            difficulty: Difficulty::Medium,
            result: CrosswordResult::empty(15),
            published,
        }
    }

    #[test]
    fn test_add_word_normalizes_and_numbers() {
        let mut store = MemoryStore::new();
        let first = store
            .add_word(NewWord::new("kayak", "boat", Difficulty::Easy).with_category("sport"))
            .unwrap();
        let second = store
            .add_word(NewWord::new("Raven", "bird", Difficulty::Medium).with_category("  "))
            .unwrap();
        assert_eq!(first.entry.word, "KAYAK");
        assert_eq!(first.entry.id, 1);
        assert_eq!(first.category.as_deref(), Some("sport"));
        assert_eq!(second.entry.id, 2);
        assert_eq!(second.category, None);
        assert_eq!(second.times_used, 0);
    }

    #[test]
    fn test_add_word_rejects_non_letters() {
        let mut store = MemoryStore::new();
        let err = store
            .add_word(NewWord::new("r2d2", "droid", Difficulty::Easy))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidWord(CoreError::NonLetter { .. })));
        assert_eq!(store.word_count(), 0);
    }

    #[test]
    fn test_list_words_newest_first() {
        let store = seeded_bank();
        let words = store.list_words().unwrap();
        assert_eq!(words.len(), 5);
        assert_eq!(words[0].entry.word, "ZEPHYR");
        assert_eq!(words[4].entry.word, "APPLE");
    }

    #[test]
    fn test_delete_word_and_ids_not_reused() {
        let mut store = seeded_bank();
        store.delete_word(5).unwrap();
        assert!(matches!(store.delete_word(5), Err(StoreError::WordNotFound(5))));
        let added = store
            .add_word(NewWord::new("nebula", "gas cloud", Difficulty::Hard))
            .unwrap();
        assert_eq!(added.entry.id, 6);
    }

    #[test]
    fn test_sample_respects_difficulty_and_count() {
        let store = seeded_bank();
        let mut rng = StdRng::seed_from_u64(7);

        let easy = store.sample_words(Difficulty::Easy, 2, &mut rng).unwrap();
        assert_eq!(easy.len(), 2);
        assert!(easy
            .iter()
            .all(|w| ["APPLE", "BREAD", "CIDER"].contains(&w.word.as_str())));
        assert_ne!(easy[0].id, easy[1].id);

        let hard = store.sample_words(Difficulty::Hard, 10, &mut rng).unwrap();
        assert_eq!(hard.len(), 2);

        let medium = store.sample_words(Difficulty::Medium, 10, &mut rng).unwrap();
        assert!(medium.is_empty());
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let store = seeded_bank();
        let a = store
            .sample_words(Difficulty::Easy, 3, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = store
            .sample_words(Difficulty::Easy, 3, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mark_used_counts_each_id_once() {
        let mut store = seeded_bank();
        store.mark_used(&[1, 1, 3, 99]).unwrap();
        let words = store.list_words().unwrap();
        let used = |id: WordId| words.iter().find(|w| w.entry.id == id).unwrap().times_used;
        assert_eq!(used(1), 1);
        assert_eq!(used(2), 0);
        assert_eq!(used(3), 1);
    }

    #[test]
    fn test_drafts_are_hidden() {
        let mut store = MemoryStore::new();
        let hidden = store.create_puzzle(draft("Draft", false)).unwrap();
        let live = store.create_puzzle(draft("Live", true)).unwrap();

        assert!(matches!(
            store.get_published(hidden.id),
            Err(StoreError::PuzzleNotFound(_))
        ));
        assert_eq!(store.get_published(live.id).unwrap().title, "Live");

        let listed = store.list_published().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, live.id);
        assert_eq!(store.puzzle_count(), 2);
    }

    #[test]
    fn test_publish_puzzle_is_idempotent() {
        let mut store = MemoryStore::new();
        let hidden = store.create_puzzle(draft("Draft", false)).unwrap();

        let first = store.publish_puzzle(hidden.id).unwrap();
        let second = store.publish_puzzle(hidden.id).unwrap();
        assert!(first.is_published());
        assert_eq!(first.published_at, second.published_at);
        assert_eq!(store.list_published().unwrap().len(), 1);

        let missing = uuid::Uuid::new_v4();
        assert!(matches!(
            store.publish_puzzle(missing),
            Err(StoreError::PuzzleNotFound(_))
        ));
    }

    #[test]
    fn test_play_and_completion_counters() {
        let mut store = MemoryStore::new();
        let puzzle = store.create_puzzle(draft("Counters", true)).unwrap();

        assert_eq!(store.record_play(puzzle.id).unwrap(), 1);
        assert_eq!(store.record_play(puzzle.id).unwrap(), 2);
        assert_eq!(store.record_completion(puzzle.id).unwrap(), 1);

        let stored = store.get_published(puzzle.id).unwrap();
        assert_eq!(stored.play_count, 2);
        assert_eq!(stored.completion_count, 1);

        let missing = uuid::Uuid::new_v4();
        assert!(matches!(
            store.record_play(missing),
            Err(StoreError::PuzzleNotFound(id)) if id == missing
        ));
    }
}
