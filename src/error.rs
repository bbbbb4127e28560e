//! Error types for the fallible edges of the engine
//!
//! The search itself never fails; these cover board parsing, game flow,
//! configuration and the background worker.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors raised while building a board from its text form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board text had no rows
    #[error("board is empty")]
    Empty,

    /// Row count outside the supported range
    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidSize(usize),

    /// A row whose length differs from the number of rows
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Unknown cell character
    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Errors that can occur while playing a game
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already ended
    #[error("game is over")]
    GameOver,

    /// The coordinate is outside the board
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),

    /// The position is already occupied
    #[error("position {0} is already occupied")]
    Occupied(Pos),
}

/// Errors loading an engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),
}

/// Errors from a background search
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The worker thread ended without sending a result
    #[error("search worker disconnected")]
    Disconnected,
}

/// Unknown difficulty name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?}, expected medium, hard or expert")]
pub struct ParseDifficultyError(pub String);
