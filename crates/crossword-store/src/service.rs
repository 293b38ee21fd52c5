use log::{info, warn};
use rand::RngCore;

use crossword_check::check;
use crossword_core::{Generator, GeneratorConfig, WordId, DEFAULT_GRID_SIZE, MAX_WORDS};

use crate::error::StoreError;
use crate::model::{Difficulty, NewPuzzle, Puzzle};
use crate::store::{PuzzleStore, WordBank};

/// Fewest words a puzzle may be generated from.
pub const MIN_WORDS: usize = 5;

/// Words drawn from the bank when the request does not say.
pub const DEFAULT_WORD_COUNT: usize = 15;

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 50;

/// Parameters for one generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub title: String,
    pub difficulty: Difficulty,
    /// How many words to draw from the bank.
    pub word_count: usize,
    /// Grid side length.
    pub size: usize,
    /// Publish right away; otherwise the puzzle is stored as a draft.
    pub publish: bool,
}

impl GenerateRequest {
    pub fn new(title: &str, difficulty: Difficulty) -> Self {
        Self {
            title: title.to_string(),
            difficulty,
            word_count: DEFAULT_WORD_COUNT,
            size: DEFAULT_GRID_SIZE,
            publish: true,
        }
    }

    fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::InvalidRequest("title must not be empty".to_string()));
        }
        if !(MIN_WORDS..=MAX_WORDS).contains(&self.word_count) {
            return Err(StoreError::InvalidRequest(format!(
                "word count must be between {MIN_WORDS} and {MAX_WORDS}, got {}",
                self.word_count
            )));
        }
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(StoreError::InvalidRequest(format!(
                "grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

/// Draws words from a bank, runs the layout engine, and stores the puzzle.
#[derive(Debug)]
pub struct PuzzleService<S> {
    store: S,
}

impl<S: WordBank + PuzzleStore> PuzzleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Generate a puzzle and store it, published unless the request asks for a draft.
    ///
    /// Rejects the request before touching the engine if it is malformed or
    /// the bank holds fewer than [`MIN_WORDS`] words at the requested
    /// difficulty. Every sampled word has its usage count bumped, whether or
    /// not the engine managed to place it.
    pub fn generate_puzzle(
        &mut self,
        request: &GenerateRequest,
        rng: &mut dyn RngCore,
    ) -> Result<Puzzle, StoreError> {
        request.validate()?;

        let words = self
            .store
            .sample_words(request.difficulty, request.word_count, rng)?;
        if words.len() < MIN_WORDS {
            return Err(StoreError::NotEnoughWords {
                difficulty: request.difficulty,
                available: words.len(),
                required: MIN_WORDS,
            });
        }

        let generator = Generator::new(GeneratorConfig::with_size(request.size));
        let result = generator.generate(&words);
        for violation in check(&result).violations {
            warn!("Layout check on '{}': {}", request.title, violation.message);
        }

        let placed = result.word_count();
        let puzzle = self.store.create_puzzle(NewPuzzle {
            title: request.title.trim().to_string(),
            difficulty: request.difficulty,
            result,
            published: request.publish,
        })?;

        let ids: Vec<WordId> = words.iter().map(|w| w.id).collect();
        self.store.mark_used(&ids)?;

        info!(
            "Generated puzzle {} '{}' ({}): placed {} of {} words",
            puzzle.id,
            puzzle.title,
            puzzle.difficulty,
            placed,
            words.len()
        );
        Ok(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::model::NewWord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MEDIUM_WORDS: &[(&str, &str)] = &[
        ("lantern", "portable light"),
        ("harbor", "sheltered port"),
        ("anchor", "holds a ship in place"),
        ("tundra", "treeless plain"),
        ("oracle", "source of prophecy"),
        ("riddle", "puzzling question"),
        ("gravel", "small stones"),
    ];

    fn service_with(words: &[(&str, &str)], difficulty: Difficulty) -> PuzzleService<MemoryStore> {
        let mut store = MemoryStore::new();
        for (word, clue) in words {
            store.add_word(NewWord::new(word, clue, difficulty)).unwrap();
        }
        PuzzleService::new(store)
    }

    #[test]
    fn test_generates_and_publishes() {
        let mut service = service_with(MEDIUM_WORDS, Difficulty::Medium);
        let request = GenerateRequest::new("Seaside", Difficulty::Medium);
        let mut rng = StdRng::seed_from_u64(1);

        let puzzle = service.generate_puzzle(&request, &mut rng).unwrap();
        assert!(puzzle.is_published());
        assert_eq!(puzzle.title, "Seaside");
        assert_eq!(puzzle.difficulty, Difficulty::Medium);
        assert!(puzzle.result.word_count() >= 1);
        assert!(check(&puzzle.result).is_clean());

        let stored = service.store().get_published(puzzle.id).unwrap();
        assert_eq!(stored.result, puzzle.result);

        // All seven words were drawn, so all seven were used once.
        let words = service.store().list_words().unwrap();
        assert!(words.iter().all(|w| w.times_used == 1));
    }

    #[test]
    fn test_draft_is_hidden_until_published() {
        let mut service = service_with(MEDIUM_WORDS, Difficulty::Medium);
        let request = GenerateRequest {
            publish: false,
            ..GenerateRequest::new("Later", Difficulty::Medium)
        };
        let draft = service
            .generate_puzzle(&request, &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert!(!draft.is_published());
        assert!(service.store().list_published().unwrap().is_empty());
        assert!(matches!(
            service.store().get_published(draft.id),
            Err(StoreError::PuzzleNotFound(_))
        ));

        let live = service.store_mut().publish_puzzle(draft.id).unwrap();
        assert!(live.is_published());
        assert_eq!(service.store().get_published(draft.id).unwrap().result, draft.result);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let request = GenerateRequest {
            word_count: 5,
            ..GenerateRequest::new("Repeat", Difficulty::Medium)
        };
        let mut first = service_with(MEDIUM_WORDS, Difficulty::Medium);
        let mut second = service_with(MEDIUM_WORDS, Difficulty::Medium);

        let a = first
            .generate_puzzle(&request, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = second
            .generate_puzzle(&request, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a.result, b.result);
    }

    #[test]
    fn test_rejects_when_bank_is_short() {
        let mut service = service_with(&MEDIUM_WORDS[..4], Difficulty::Medium);
        let request = GenerateRequest::new("Too small", Difficulty::Medium);
        let err = service
            .generate_puzzle(&request, &mut StdRng::seed_from_u64(3))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotEnoughWords { available: 4, required: 5, .. }
        ));
        assert!(service.store().list_published().unwrap().is_empty());
        assert!(service
            .store()
            .list_words()
            .unwrap()
            .iter()
            .all(|w| w.times_used == 0));
    }

    #[test]
    fn test_other_difficulties_do_not_count() {
        let mut service = service_with(MEDIUM_WORDS, Difficulty::Hard);
        let request = GenerateRequest::new("Wrong tier", Difficulty::Easy);
        let err = service
            .generate_puzzle(&request, &mut StdRng::seed_from_u64(3))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotEnoughWords { available: 0, .. }));
    }

    #[test]
    fn test_rejects_malformed_requests() {
        let mut service = service_with(MEDIUM_WORDS, Difficulty::Medium);
        let mut rng = StdRng::seed_from_u64(5);

        let bad = [
            GenerateRequest::new("  ", Difficulty::Medium),
            GenerateRequest {
                word_count: 4,
                ..GenerateRequest::new("Few", Difficulty::Medium)
            },
            GenerateRequest {
                word_count: 21,
                ..GenerateRequest::new("Many", Difficulty::Medium)
            },
            GenerateRequest {
                size: 2,
                ..GenerateRequest::new("Tiny", Difficulty::Medium)
            },
        ];
        for request in &bad {
            assert!(matches!(
                service.generate_puzzle(request, &mut rng),
                Err(StoreError::InvalidRequest(_))
            ));
        }
        assert_eq!(service.into_inner().puzzle_count(), 0);
    }
}
