//! Goban command-line game.
//!
//! Usage:
//!   goban                       # 5x5 game, record saved to ~/.goban/
//!   goban --size 9 --plain      # 9x9 without colours
//!   goban --replay game.json    # print the final position of a record
//!   goban --last                # same, for the last saved game

use anyhow::{Context, Result};
use clap::Parser;
use goban::config::GameConfig;
use goban::render::{render_board, RenderStyle};
use goban::session::run_session;
use goban::{build_info, persistence, replay, GameRecord};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play a two-player game of stone placement and capture in the terminal.
#[derive(Parser)]
#[command(name = "goban", about = "Two-player capture game on a square board")]
struct Cli {
    /// Side length of the board
    #[arg(long, short, default_value_t = goban::constants::DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Draw the board without terminal colours
    #[arg(long)]
    plain: bool,

    /// Write the game record to this file instead of ~/.goban/last_game.json
    #[arg(long)]
    record: Option<PathBuf>,

    /// Do not save a game record
    #[arg(long, conflicts_with = "record")]
    no_record: bool,

    /// Replay a saved record, print the final board and exit
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Replay the most recently saved game
    #[arg(long, conflicts_with = "replay")]
    last: bool,

    /// Log engine events to stderr
    #[arg(long, short)]
    verbose: bool,

    /// Print version information
    #[arg(long, short = 'V')]
    version: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: self.size,
            render_style: if self.plain {
                RenderStyle::Plain
            } else {
                RenderStyle::Color
            },
            record_path: self.record.clone(),
            save_record: !self.no_record,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_replay(record: &GameRecord, style: RenderStyle) -> Result<()> {
    let game = replay(record).context("replaying game record")?;
    print!("{}", render_board(&game.board, style));
    println!(
        "{} moves, next to play: {}",
        game.move_number(),
        game.current_player.name()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    init_tracing(cli.verbose);

    let config = cli.game_config();
    config.validate()?;

    if let Some(path) = &cli.replay {
        let record = GameRecord::load(path)?;
        return print_replay(&record, config.render_style);
    }
    if cli.last {
        return match persistence::load_last_game()? {
            Some(record) => print_replay(&record, config.render_style),
            None => {
                println!("No saved game found.");
                Ok(())
            }
        };
    }

    let stdin = io::stdin();
    let game = run_session(&config, stdin.lock(), io::stdout()).context("terminal I/O failed")?;

    if config.save_record && !game.record.moves.is_empty() {
        let saved = match &config.record_path {
            Some(path) => game.record.save(path).map(|_| path.clone()),
            None => persistence::save_last_game(&game.record),
        };
        match saved {
            Ok(path) => {
                tracing::info!(path = %path.display(), "record saved");
                println!("Record saved to {}", path.display());
            }
            Err(err) => tracing::warn!(%err, "could not save game record"),
        }
    }
    Ok(())
}
