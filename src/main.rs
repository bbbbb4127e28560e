//! Gomoku AI engine CLI
//!
//! - `gomoku suggest --board FILE`: recommend a move for a position
//! - `gomoku selfplay`: play the engine against itself

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gomoku::{AIEngine, Board, Difficulty, EngineConfig, GameState, GameStatus, Stone};

#[derive(Debug, Parser)]
#[command(name = "gomoku", version, about = "Five-in-a-row move recommendation engine")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend a move for the position in a board file
    Suggest {
        /// Board text file: one row per line, `.` empty, `X` black, `O` white
        #[arg(long)]
        board: PathBuf,
        /// Side to move; defaults to the side with fewer stones
        #[arg(long, value_enum)]
        player: Option<Side>,
        /// Overrides the configured difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// JSON engine config
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Play an engine-vs-engine game
    Selfplay {
        #[arg(long, default_value_t = Difficulty::Medium)]
        black: Difficulty,
        #[arg(long, default_value_t = Difficulty::Medium)]
        white: Difficulty,
        /// Overrides the configured board size
        #[arg(long)]
        size: Option<usize>,
        /// Stop after this many moves
        #[arg(long)]
        max_moves: Option<usize>,
        /// JSON engine config
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Side to move when none is given: fewer stones moves, Black on ties
fn side_to_move(board: &Board) -> Stone {
    let black = board.stones(Stone::Black).map_or(0, |bb| bb.count());
    let white = board.stones(Stone::White).map_or(0, |bb| bb.count());
    if white < black {
        Stone::White
    } else {
        Stone::Black
    }
}

fn suggest(
    board_path: PathBuf,
    player: Option<Side>,
    difficulty: Option<Difficulty>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config.as_ref())?;
    let text = std::fs::read_to_string(&board_path)
        .with_context(|| format!("reading board {}", board_path.display()))?;
    let mut board: Board = text
        .parse()
        .with_context(|| format!("parsing board {}", board_path.display()))?;

    if board.is_full() {
        bail!("board is full, no move to suggest");
    }

    let player = player.map_or_else(|| side_to_move(&board), Stone::from);
    let engine = AIEngine::new(difficulty.unwrap_or(config.difficulty));
    let result = engine.get_move_with_stats(&mut board, player);

    println!("{} {}", result.best_move.row, result.best_move.col);
    Ok(())
}

fn selfplay(
    black: Difficulty,
    white: Difficulty,
    size: Option<usize>,
    max_moves: Option<usize>,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config.as_ref())?;
    if let Some(size) = size {
        config.board_size = size;
    }
    config.validate()?;

    let mut game = GameState::new(config.board_size);
    let limit = max_moves.unwrap_or(usize::MAX);

    while !game.is_over() && game.move_history.len() < limit {
        let color = game.current_turn;
        let difficulty = if color == Stone::Black { black } else { white };
        let result = game.play_ai(difficulty)?;
        println!(
            "{:>3}. {:<5} ({}) {} [{} nodes, {}ms]",
            game.move_history.len(),
            color.to_string(),
            difficulty,
            result.best_move,
            result.stats.nodes,
            result.time_ms
        );
    }

    print!("\n{}", game.board);
    match game.status {
        GameStatus::Won => {
            let winner = game.winner.unwrap_or(Stone::Empty);
            println!("{winner} wins after {} moves", game.move_history.len());
        }
        GameStatus::Draw => println!("draw"),
        GameStatus::Playing => println!("stopped after {} moves", game.move_history.len()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Suggest {
            board,
            player,
            difficulty,
            config,
        } => suggest(board, player, difficulty, config),
        Command::Selfplay {
            black,
            white,
            size,
            max_moves,
            config,
        } => selfplay(black, white, size, max_moves, config),
    }
}
