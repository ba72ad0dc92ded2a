use anyhow::Context;
use campo_core::*;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::io;

mod command;
mod render;
mod session;

/// Campo Minado in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of the square board
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: Coord,

    /// Number of mines
    #[arg(long, default_value_t = DEFAULT_MINES)]
    mines: CellCount,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the explosion animation on loss
    #[arg(long)]
    no_animation: bool,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let config = GameConfig::new(args.size, args.mines).context("invalid board configuration")?;
    let game = match args.seed {
        Some(seed) => Game::with_seed(config, seed, TimerQueue::new())?,
        None => Game::new(config, TimerQueue::new())?,
    };
    log::info!(
        "Starting {}x{} game with {} mines",
        config.size,
        config.size,
        config.mines
    );

    let mut session = session::Session::new(game, !args.no_animation);
    session.run(io::stdin().lock(), io::stdout().lock())
}
