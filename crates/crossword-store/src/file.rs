use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::RngCore;

use crossword_core::{WordEntry, WordId};

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::model::{BankWord, Difficulty, NewPuzzle, NewWord, Puzzle, PuzzleId};
use crate::store::{PuzzleStore, WordBank};

/// A [`MemoryStore`] backed by a single JSON document on disk.
///
/// The file is read once on [`open`](Self::open) and rewritten after every
/// mutation. A mutation is applied to a copy of the data and only becomes
/// visible once that copy has been written; a failed write leaves the store
/// as it was.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file starts an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let json = fs::read_to_string(&path)?;
            let store: MemoryStore = serde_json::from_str(&json)?;
            info!(
                "Loaded {} words and {} puzzles from {}",
                store.word_count(),
                store.puzzle_count(),
                path.display()
            );
            store
        } else {
            info!("No store at {}, starting empty", path.display());
            MemoryStore::new()
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    /// Apply `change` to a copy of the data, write the copy, then adopt it.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.inner.clone();
        let value = change(&mut next)?;
        self.save(&next)?;
        self.inner = next;
        Ok(value)
    }

    fn save(&self, data: &MemoryStore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        // Sibling temp file, then rename over the target.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Saved store to {}", self.path.display());
        Ok(())
    }
}

impl WordBank for JsonFileStore {
    fn add_word(&mut self, word: NewWord) -> Result<BankWord, StoreError> {
        self.commit(|store| store.add_word(word))
    }

    fn list_words(&self) -> Result<Vec<BankWord>, StoreError> {
        self.inner.list_words()
    }

    fn delete_word(&mut self, id: WordId) -> Result<(), StoreError> {
        self.commit(|store| store.delete_word(id))
    }

    fn sample_words(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<WordEntry>, StoreError> {
        self.inner.sample_words(difficulty, count, rng)
    }

    fn mark_used(&mut self, ids: &[WordId]) -> Result<(), StoreError> {
        self.commit(|store| store.mark_used(ids))
    }
}

impl PuzzleStore for JsonFileStore {
    fn create_puzzle(&mut self, puzzle: NewPuzzle) -> Result<Puzzle, StoreError> {
        self.commit(|store| store.create_puzzle(puzzle))
    }

    fn get_published(&self, id: PuzzleId) -> Result<Puzzle, StoreError> {
        self.inner.get_published(id)
    }

    fn publish_puzzle(&mut self, id: PuzzleId) -> Result<Puzzle, StoreError> {
        self.commit(|store| store.publish_puzzle(id))
    }

    fn list_published(&self) -> Result<Vec<Puzzle>, StoreError> {
        self.inner.list_published()
    }

    fn record_play(&mut self, id: PuzzleId) -> Result<u64, StoreError> {
        self.commit(|store| store.record_play(id))
    }

    fn record_completion(&mut self, id: PuzzleId) -> Result<u64, StoreError> {
        self.commit(|store| store.record_completion(id))
    }
}
