//! Terminal tic-tac-toe against the computer.
//!
//! Logs go to stderr (filter with `RUST_LOG` or `--log-level`) so the board
//! on stdout is left alone.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_ttt::{GameConfig, GameRng, OccupiedCellPolicy, Session, SessionEnd, Side, TerminalConsole};

/// What to do when you pick a cell that is already taken.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OccupiedArg {
    /// Lose the turn; the computer moves anyway
    ConsumeTurn,
    /// Ask again
    Reprompt,
}

impl From<OccupiedArg> for OccupiedCellPolicy {
    fn from(arg: OccupiedArg) -> Self {
        match arg {
            OccupiedArg::ConsumeTurn => OccupiedCellPolicy::ConsumeTurn,
            OccupiedArg::Reprompt => OccupiedCellPolicy::Reprompt,
        }
    }
}

/// Play tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "rust-ttt")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Handling of picks on occupied cells
    #[arg(long, value_enum, default_value = "consume-turn")]
    occupied_policy: OccupiedArg,

    /// Let the computer open the game
    #[arg(long)]
    computer_first: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    no_clear: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new()
            .with_occupied_policy(self.occupied_policy.into())
            .with_first_mover(if self.computer_first {
                Side::Computer
            } else {
                Side::Player
            });
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "rng seeded");

    let console = TerminalConsole::stdio().with_clear_screen(!cli.no_clear);
    let mut session = Session::new(console, rng, config);

    match session.play()? {
        SessionEnd::Aborted => info!("no game played"),
        SessionEnd::Finished { result, .. } => info!(%result, "session finished"),
    }

    Ok(())
}
