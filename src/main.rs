//! Vocabulary Trainer - CLI
//!
//! Flashcard trainer with TUI and CLI modes: learn new words at random and
//! review learned ones weighted by familiarity.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocab_trainer::{
    commands::{run_simple, run_simulation, status_report},
    output::{print_simulation_result, print_status_report},
    selection::{Mode, Session},
    store::VocabularyStore,
    wordlists::{VocabSource, load_or_fallback, loader::save_to_file},
};

#[derive(Parser)]
#[command(
    name = "vocab_trainer",
    about = "Flashcard vocabulary trainer with familiarity-weighted review",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list JSON file (falls back to a built-in list if unusable)
    #[arg(short = 'w', long, global = true, default_value = "words.json")]
    words: PathBuf,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write progress back to the word list on exit
    #[arg(long, global = true)]
    save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Show learning progress
    Status,

    /// Sample the selection distribution without changing progress
    Simulate {
        /// Selection mode: new or review
        #[arg(short, long, default_value = "review")]
        mode: String,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "100000")]
        draws: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (entries, source) = load_or_fallback(&cli.words);
    let store = VocabularyStore::new(entries);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            check_save_target(cli.save, &cli.words, &source)?;
            let session = run_play_command(new_session(store, cli.seed))?;
            save_if_requested(cli.save, &cli.words, session.store())
        }
        Commands::Simple => {
            check_save_target(cli.save, &cli.words, &source)?;
            let mut session = new_session(store, cli.seed);
            run_simple(&mut session)?;
            save_if_requested(cli.save, &cli.words, session.store())
        }
        Commands::Status => {
            print_status_report(&status_report(&store, source));
            Ok(())
        }
        Commands::Simulate { mode, draws } => {
            let mode = Mode::from_name(&mode)
                .ok_or_else(|| anyhow!("unknown mode '{mode}' (expected 'new' or 'review')"))?;
            let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
            let result = run_simulation(&store, mode, draws, seed, true);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn new_session(store: VocabularyStore, seed: Option<u64>) -> Session<StdRng> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Session::new(store, rng)
}

fn run_play_command(session: Session<StdRng>) -> Result<Session<StdRng>> {
    use vocab_trainer::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}

/// Refuse `--save` when an existing file was replaced by the built-in list
///
/// Saving would overwrite the unreadable file with the fallback words. A
/// missing file is fine; it gets created.
fn check_save_target(save: bool, path: &Path, source: &VocabSource) -> Result<()> {
    if save && source.is_fallback() && path.exists() {
        bail!(
            "refusing to save over {}: it could not be loaded ({source}); fix or move it first",
            path.display()
        );
    }
    Ok(())
}

fn save_if_requested(save: bool, path: &Path, store: &VocabularyStore) -> Result<()> {
    if !save {
        return Ok(());
    }
    save_to_file(path, store).with_context(|| format!("saving progress to {}", path.display()))?;
    info!(path = %path.display(), "progress saved");
    Ok(())
}
