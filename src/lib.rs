pub mod card;
pub mod tableau;
pub mod error;
pub mod rules;
pub mod moves;
pub mod guard;
pub mod command;
pub mod game;
pub mod snapshot;
pub mod deal_code;
pub mod display;
pub mod logging;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use crate::card::{Card, DECK_LEN, Rank, Suit};
pub use crate::error::{MoveError, Rejection};
pub use crate::game::{GameState, Reply, Report};
pub use crate::snapshot::Snapshot;
pub use crate::tableau::{Location, Tableau};

/// Command-line options for the `patience` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "patience", about = "Klondike-style patience in the terminal")]
pub struct Config {
    /// Shuffle deterministically from this seed
    #[arg(long, conflicts_with = "deal")]
    pub seed: Option<u64>,

    /// Replay an exact layout from the deal code printed at startup
    #[arg(long)]
    pub deal: Option<String>,

    /// Print the board as one JSON line per turn instead of text
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Deck order selected by `--deal`, `--seed`, or neither.
    pub fn deck(&self) -> Result<[Card; DECK_LEN]> {
        if let Some(code) = &self.deal {
            return deal_code::deck_from_str(code)
                .with_context(|| format!("invalid --deal value {code:?}"));
        }
        let deck = match self.seed {
            Some(seed) => card::shuffled_deck(&mut StdRng::seed_from_u64(seed)),
            None => card::shuffled_deck(&mut rand::thread_rng()),
        };
        Ok(deck)
    }
}

/// `SetLoggerError` only implements `std::error::Error` with log's `std`
/// feature.
fn install_logger(verbose: bool) -> Result<()> {
    logging::init(verbose).map_err(|e| anyhow!("installing logger: {e}"))
}

fn render<W: Write>(game: &GameState, config: &Config, out: &mut W) -> Result<()> {
    let snap = game.snapshot();
    if config.json {
        let line = snap.to_json().context("serializing board")?;
        writeln!(out, "{line}")?;
    } else {
        write!(out, "{}", display::render_snapshot(&snap))?;
    }
    Ok(())
}

/// Drive one game: show the board, read a command, print the reply.
///
/// Returns when the player quits or the input ends. Lines are read as bytes
/// and decoded lossily, so a line that is not UTF-8 is just an invalid
/// command.
pub fn play<R: BufRead, W: Write>(
    game: &mut GameState,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        render(game, config, out)?;
        write!(out, "Enter command: ")?;
        out.flush()?;

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).context("reading command")?;
        if read == 0 {
            writeln!(out)?;
            info!("input closed after {} moves", game.move_count());
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        let reply = game.handle_command(&line);
        writeln!(out, "{reply}")?;
        if reply.is_quit() {
            return Ok(());
        }
    }
}

/// Entry point for the `patience` binary.
///
/// Example:
///   cargo run -- --seed 12345
///   cargo run -- --deal 0 --json
pub fn run() -> Result<()> {
    let config = Config::parse();
    install_logger(config.verbose)?;

    let deck = config.deck()?;
    let code = deal_code::encode(&deck).context("computing deal code")?;
    let mut game = GameState::new(deck);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Deal: {code}")?;
    info!("dealt game {code}");

    play(&mut game, &config, &mut stdin.lock(), &mut out)
}
