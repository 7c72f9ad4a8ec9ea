use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use connect_four_engine::config::AppConfig;
use connect_four_engine::game::{Board, GameState};
use connect_four_engine::render::{describe_outcome, render_board};
use connect_four_engine::simulate::simulate;

/// Drive the Connect Four engine from the command line.
#[derive(Parser)]
#[command(name = "connect_four_engine", about = "Connect Four board engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a comma-separated list of 0-based columns
    Play {
        /// e.g. 3,3,4,2
        moves: String,
    },
    /// Evaluate a stored board (JSON, 7 columns of 6 cells)
    Eval {
        /// Path to the board file
        board: PathBuf,
    },
    /// Play random games and check both evaluators agree
    Simulate {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let config = if config_found {
        AppConfig::load(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?
    } else {
        AppConfig::default()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.command {
        Command::Play { moves } => play(&config, &moves),
        Command::Eval { board } => eval(&config, &board),
        Command::Simulate { games, seed } => {
            let games = games.unwrap_or(config.simulation.games);
            let seed = seed.unwrap_or(config.simulation.seed);
            let report = simulate(games, seed, config.game.first_player);
            println!("{}", serde_json::to_string_pretty(&report)?);
            anyhow::ensure!(
                report.disagreements == 0,
                "{} evaluator disagreements",
                report.disagreements
            );
            Ok(())
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
            Ok(())
        }
    }
}

fn play(config: &AppConfig, moves: &str) -> Result<()> {
    let columns = moves
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>().with_context(|| format!("invalid column '{s}'")))
        .collect::<Result<Vec<_>>>()?;

    let mut state = GameState::with_first_player(config.game.first_player);
    for (index, &column) in columns.iter().enumerate() {
        state
            .apply_move_mut(column)
            .with_context(|| format!("move {} (column {column})", index + 1))?;
    }

    print!(
        "{}",
        render_board(state.board(), state.outcome().winning_cells(), &config.render)
    );
    println!("{}", describe_outcome(state.outcome()));
    if !state.is_terminal() {
        println!("{} to move", state.current_player().name());
    }
    Ok(())
}

fn eval(config: &AppConfig, path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading board from {}", path.display()))?;
    let board = Board::from_json(&json).with_context(|| format!("decoding {}", path.display()))?;

    let outcome = board.evaluate();
    print!(
        "{}",
        render_board(&board, outcome.winning_cells(), &config.render)
    );
    println!("{}", describe_outcome(&outcome));
    Ok(())
}
