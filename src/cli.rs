use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::config::GameConfig;
use crate::core::engine::Engine;
use crate::games::hangman::script::run_script;
use crate::games::hangman::{HangmanRenderer, HangmanSession};

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "Terminal hangman with programming words")]
#[command(version)]
pub struct Cli {
    /// Seed for word selection (random if omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// JSON file overriding the word bank, e.g. {"words": ["rust"]}
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs here (logs are dropped in play mode otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Read key identifiers, one per line, and print events as JSON lines
    Script {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// List the word bank
    Words,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("could not load config {}", path.display()))?,
            None => GameConfig::default(),
        };
        Ok(config.with_seed(self.seed))
    }
}

enum LogTarget {
    Stderr,
    Discard,
}

fn init_tracing(log_file: Option<&PathBuf>, fallback: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (log_file, fallback) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, LogTarget::Stderr) => builder.with_writer(io::stderr).init(),
        (None, LogTarget::Discard) => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    match &cli.command {
        None | Some(Commands::Play) => {
            init_tracing(cli.log_file.as_ref(), LogTarget::Discard)?;
            info!(seed = ?config.seed, words = config.word_bank.len(), "starting play");

            let session = HangmanSession::new(config);
            let engine = Engine::new(session, HangmanRenderer::new());

            let mut terminal = ratatui::init();
            let result = engine.run(&mut terminal);
            ratatui::restore();

            let session = result?;
            let score = session.game().score();
            println!("Wins: {}  Losses: {}", score.wins, score.losses);
        }

        Some(Commands::Script { input }) => {
            init_tracing(cli.log_file.as_ref(), LogTarget::Stderr)?;
            let mut session = HangmanSession::new(config);
            let stdout = io::stdout().lock();

            let emitted = match input {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("could not open script {}", path.display()))?;
                    run_script(&mut session, BufReader::new(file), stdout)?
                }
                None => run_script(&mut session, io::stdin().lock(), stdout)?,
            };
            info!(emitted, "script finished");
        }

        Some(Commands::Words) => {
            for word in config.word_bank.words() {
                println!("{word}");
            }
        }
    }

    Ok(())
}
