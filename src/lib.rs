//! Gomoku move-recommendation engine
//!
//! A heuristic five-in-a-row player for square boards (15x15 by default):
//! - Five or more stones in a row wins
//! - No captures, no forbidden moves
//! - Three difficulty tiers: medium, hard, expert
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and the text board format
//! - [`rules`]: Win detection
//! - [`eval`]: Per-cell position evaluation
//! - [`search`]: Candidate generation, greedy search and minimax with alpha-beta
//! - [`engine`]: Difficulty policy and top-level entry points
//! - [`game`]: Headless game flow driving the engine
//! - [`worker`]: Background search on a worker thread
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{create_empty_board, get_ai_move, Difficulty, Pos, Stone};
//!
//! let mut board = create_empty_board(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // Engine answers as White; applying the move is up to the caller
//! let pos = get_ai_move(&mut board, Stone::White, Difficulty::Medium);
//! board.place_stone(pos, Stone::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Search
//!
//! - Medium: every candidate is evaluated once and the best one is played
//! - Hard: minimax with alpha-beta, 3 plies
//! - Expert: minimax with alpha-beta, 4 plies
//!
//! Candidates are empty cells touching at least one stone, so the engine is a
//! heuristic player and not a solver.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod worker;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use config::EngineConfig;
pub use engine::{
    check_winner, create_empty_board, get_ai_move, AIEngine, Algorithm, Difficulty, MoveResult,
    SearchPolicy,
};
pub use error::{BoardError, ConfigError, GameError, ParseDifficultyError, SearchError};
pub use game::{GameState, GameStatus};
pub use worker::SearchHandle;
