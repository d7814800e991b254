//! guess - terminal front end for the self-extending guessing game.
//!
//! Prompts go to stdout, logs go to stderr.

mod console;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_core::{Error, Game, GuessConfig, KnowledgeStore, SchemaRegistry};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use console::ConsolePrompter;

#[derive(Debug, Parser)]
#[command(
    name = "guess",
    version,
    about = "Guess Who: a guessing game that learns new characters"
)]
struct Cli {
    /// Knowledge store file (overrides GUESS_STORE and the config file).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// TOML config file. Defaults to ./guess.toml when present.
    #[arg(long, global = true, env = "GUESS_CONFIG")]
    config: Option<PathBuf>,

    /// Log engine activity at info level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play until you decline another round (default).
    Play,
    /// List the characters in the knowledge store.
    Subjects,
    /// List the questions derived from the knowledge store.
    Questions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting guess v{}", env!("CARGO_PKG_VERSION"));

    let config =
        GuessConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let store_path = config.resolve_store_path(cli.store.as_deref());
    info!("Knowledge store: {}", store_path.display());

    let store = KnowledgeStore::open(&store_path)
        .with_context(|| format!("failed to open knowledge store {}", store_path.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(store, config),
        Command::Subjects => {
            list_subjects(&store);
            Ok(())
        }
        Command::Questions => {
            list_questions(&store);
            Ok(())
        }
    }
}

/// `RUST_LOG` when set and valid, otherwise `warn` (`info` with `--verbose`).
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(default_level.into()))
}

fn play(store: KnowledgeStore, config: GuessConfig) -> Result<()> {
    let mut game = Game::new(store, config.vocabulary);
    let mut prompter = ConsolePrompter::stdio();

    match game.run(&mut prompter) {
        Ok(_) => Ok(()),
        Err(Error::InputClosed) => {
            warn!("Input closed, ending the game");
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}

fn list_subjects(store: &KnowledgeStore) {
    for (index, subject) in store.subjects().iter().enumerate() {
        println!(
            "{:>3}. {} ({}, {}) - popularity {}, {} attributes",
            index + 1,
            subject.name,
            subject.category,
            subject.group,
            subject.popularity,
            subject.attributes.len()
        );
    }
}

fn list_questions(store: &KnowledgeStore) {
    let registry = SchemaRegistry::from_subjects(store.subjects());
    for entry in registry.entries() {
        println!("{:<24} {}", entry.key, entry.question);
    }
}
