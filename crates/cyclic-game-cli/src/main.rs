//! Cyclic Game CLI
//!
//! Plays rock-paper-scissors over any odd move set against the computer,
//! committing to each computer move with HMAC-SHA-256 before the user picks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cyclic_game_core::{Commitment, CommitmentKey, MoveSet, Session, USAGE_EXAMPLE};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit status for a published HMAC that does not match
const EXIT_MISMATCH: u8 = 1;

/// Exit status for an invalid move set
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "cyclic-game",
    version,
    about = "Provably fair rock-paper-scissors over any odd number of moves",
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Moves in cycle order: an odd number (at least 3) of unique labels
    #[arg(value_name = "MOVES")]
    moves: Vec<String>,

    /// Print each round report as a JSON line as well
    #[arg(long)]
    json: bool,

    /// Tracing filter for diagnostics on stderr
    #[arg(long, global = true, env = "CYCLIC_GAME_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a revealed key against a published HMAC
    Verify {
        /// Revealed key, hex
        #[arg(long)]
        key: String,

        /// Computer move shown with the result
        #[arg(long = "move", value_name = "MOVE")]
        label: String,

        /// HMAC published before the move
        #[arg(long)]
        hmac: String,
    },
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

fn verify(key: &str, label: &str, hmac: &str) -> Result<u8> {
    let key: CommitmentKey = key.parse().context("invalid key")?;
    let hmac: Commitment = hmac.parse().context("invalid HMAC")?;

    if hmac.verify(&key, label) {
        println!("Commitment verified");
        Ok(0)
    } else {
        println!("Commitment mismatch");
        Ok(EXIT_MISMATCH)
    }
}

fn play(moves: Vec<String>, json: bool) -> Result<u8> {
    let moves = match MoveSet::validate(moves) {
        Ok(moves) => moves,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage example: {USAGE_EXAMPLE}");
            return Ok(EXIT_USAGE);
        }
    };
    info!(moves = ?moves.as_slice(), "starting session");

    let mut session = Session::new(moves).json_reports(json);
    let stdin = io::stdin();
    let rounds = session
        .run(stdin.lock(), io::stdout().lock())
        .context("game session failed")?;
    info!(rounds, "goodbye");
    Ok(0)
}

fn run(cli: Cli) -> Result<u8> {
    init_tracing(&cli.log_level)?;

    match cli.command {
        Some(Commands::Verify { key, label, hmac }) => verify(&key, &label, &hmac),
        None => play(cli.moves, cli.json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
