use std::fmt::Write;

use anyhow::{Context, Result};
use rand::RngCore;

use crossword_check::{check, CheckReport};
use crossword_core::WordId;
use crossword_store::{
    BankWord, Difficulty, GenerateRequest, NewWord, Puzzle, PuzzleId, PuzzleService, PuzzleStore,
    WordBank,
};

use crate::settings::Settings;

/// Everything a CLI invocation works against.
pub struct App<S> {
    service: PuzzleService<S>,
    settings: Settings,
}

impl<S: WordBank + PuzzleStore> App<S> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            service: PuzzleService::new(store),
            settings,
        }
    }

    // ── Word bank ────────────────────────────────────────────────────

    pub fn add_word(
        &mut self,
        word: &str,
        clue: &str,
        difficulty: Option<Difficulty>,
        category: Option<&str>,
        author: &str,
    ) -> Result<BankWord> {
        let mut new_word = NewWord::new(
            word,
            clue,
            difficulty.unwrap_or(self.settings.default_difficulty),
        )
        .with_author(author);
        if let Some(category) = category {
            new_word = new_word.with_category(category);
        }
        self.service
            .store_mut()
            .add_word(new_word)
            .with_context(|| format!("Failed to add word '{word}'"))
    }

    pub fn list_words(&self) -> Result<Vec<BankWord>> {
        Ok(self.service.store().list_words()?)
    }

    pub fn delete_word(&mut self, id: WordId) -> Result<()> {
        Ok(self.service.store_mut().delete_word(id)?)
    }

    // ── Puzzles ──────────────────────────────────────────────────────

    pub fn generate(
        &mut self,
        title: &str,
        difficulty: Option<Difficulty>,
        word_count: Option<usize>,
        size: Option<usize>,
        draft: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Puzzle> {
        let request = GenerateRequest {
            title: title.to_string(),
            difficulty: difficulty.unwrap_or(self.settings.default_difficulty),
            word_count: word_count.unwrap_or(self.settings.default_word_count),
            size: size.unwrap_or(self.settings.grid_size),
            publish: !draft,
        };
        self.service
            .generate_puzzle(&request, rng)
            .with_context(|| format!("Failed to generate puzzle '{title}'"))
    }

    pub fn publish(&mut self, id: PuzzleId) -> Result<Puzzle> {
        Ok(self.service.store_mut().publish_puzzle(id)?)
    }

    pub fn list_puzzles(&self) -> Result<Vec<Puzzle>> {
        Ok(self.service.store().list_published()?)
    }

    pub fn puzzle(&self, id: PuzzleId) -> Result<Puzzle> {
        Ok(self.service.store().get_published(id)?)
    }

    pub fn record_play(&mut self, id: PuzzleId) -> Result<u64> {
        Ok(self.service.store_mut().record_play(id)?)
    }

    pub fn record_completion(&mut self, id: PuzzleId) -> Result<u64> {
        Ok(self.service.store_mut().record_completion(id)?)
    }

    pub fn check(&self, id: PuzzleId) -> Result<CheckReport> {
        Ok(check(&self.puzzle(id)?.result))
    }
}

pub fn format_word(word: &BankWord) -> String {
    let mut line = format!(
        "{:>4}  {:<16} {:<7} used {:>3}  {}",
        word.entry.id, word.entry.word, word.difficulty, word.times_used, word.entry.clue
    );
    if let Some(category) = &word.category {
        let _ = write!(line, " [{category}]");
    }
    line
}

pub fn format_summary(puzzle: &Puzzle) -> String {
    format!(
        "{}  {:<24} {:<7} {:>2} words  played {}  completed {}",
        puzzle.id,
        puzzle.title,
        puzzle.difficulty,
        puzzle.result.word_count(),
        puzzle.play_count,
        puzzle.completion_count
    )
}

/// Title, solved grid, and both clue lists.
pub fn format_puzzle(puzzle: &Puzzle) -> String {
    let mut out = format!("{} ({})\n\n{}", puzzle.title, puzzle.difficulty, puzzle.result.grid);
    for (heading, clues) in [
        ("Across", &puzzle.result.across_clues),
        ("Down", &puzzle.result.down_clues),
    ] {
        let _ = writeln!(out, "\n{heading}");
        for clue in clues {
            let _ = writeln!(out, "  {:>2}. {} ({})", clue.number, clue.text, clue.len());
        }
    }
    out
}
