mod app;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crossword_core::WordId;
use crossword_store::{Difficulty, JsonFileStore, PuzzleId};

use crate::app::{format_puzzle, format_summary, format_word, App};
use crate::settings::Settings;

#[derive(Parser)]
#[command(author, version, about = "Crossword word bank and puzzle generator", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "crossword.json")]
    config: PathBuf,

    /// Store file, overriding the one named in the config
    #[arg(short = 's', long = "store")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the word bank
    Words {
        #[command(subcommand)]
        action: WordsAction,
    },
    /// Generate a puzzle from the word bank
    Generate {
        #[arg(short = 't', long = "title")]
        title: String,
        #[arg(short = 'd', long = "difficulty")]
        difficulty: Option<Difficulty>,
        /// Number of words to draw from the bank (5-20)
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
        /// Grid side length
        #[arg(long = "size")]
        size: Option<usize>,
        /// Seed for word sampling, for reproducible puzzles
        #[arg(long = "seed")]
        seed: Option<u64>,
        /// Store the puzzle unpublished
        #[arg(long = "draft")]
        draft: bool,
    },
    /// Publish a draft puzzle
    Publish { id: PuzzleId },
    /// List published puzzles
    Puzzles,
    /// Print a puzzle with its grid and clues
    Show {
        id: PuzzleId,
        /// Print the stored JSON instead
        #[arg(long = "json")]
        json: bool,
    },
    /// Record that a puzzle was played
    Play { id: PuzzleId },
    /// Record that a puzzle was completed
    Complete { id: PuzzleId },
    /// Run the layout checks on a stored puzzle
    Check { id: PuzzleId },
}

#[derive(Subcommand)]
enum WordsAction {
    /// Add a word and its clue
    Add {
        word: String,
        clue: String,
        #[arg(short = 'd', long = "difficulty")]
        difficulty: Option<Difficulty>,
        #[arg(long = "category")]
        category: Option<String>,
        #[arg(long = "author", default_value = "")]
        author: String,
    },
    /// List all words, newest first
    List,
    /// Delete a word by id
    Delete { id: WordId },
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.config)?;
    if let Some(store) = args.store {
        settings.store_path = store;
    }
    let store = JsonFileStore::open(&settings.store_path)
        .with_context(|| format!("Failed to open store {}", settings.store_path.display()))?;
    let mut app = App::new(store, settings);

    match args.command {
        Command::Words { action } => match action {
            WordsAction::Add {
                word,
                clue,
                difficulty,
                category,
                author,
            } => {
                let added = app.add_word(&word, &clue, difficulty, category.as_deref(), &author)?;
                println!("{}", format_word(&added));
            }
            WordsAction::List => {
                for word in app.list_words()? {
                    println!("{}", format_word(&word));
                }
            }
            WordsAction::Delete { id } => {
                app.delete_word(id)?;
                info!("Deleted word {id}");
            }
        },
        Command::Generate {
            title,
            difficulty,
            count,
            size,
            seed,
            draft,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let puzzle = app.generate(&title, difficulty, count, size, draft, &mut rng)?;
            println!("{}", format_summary(&puzzle));
        }
        Command::Publish { id } => {
            let puzzle = app.publish(id)?;
            println!("{}", format_summary(&puzzle));
        }
        Command::Puzzles => {
            for puzzle in app.list_puzzles()? {
                println!("{}", format_summary(&puzzle));
            }
        }
        Command::Show { id, json } => {
            let puzzle = app.puzzle(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print!("{}", format_puzzle(&puzzle));
            }
        }
        Command::Play { id } => {
            println!("{}", app.record_play(id)?);
        }
        Command::Complete { id } => {
            println!("{}", app.record_completion(id)?);
        }
        Command::Check { id } => {
            let report = app.check(id)?;
            if report.is_empty() {
                println!("No layout violations");
            }
            for violation in &report.violations {
                println!("{:?}: {}", violation.severity, violation.message);
            }
            if !report.is_clean() {
                warn!("Puzzle {id} failed the layout checks");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
