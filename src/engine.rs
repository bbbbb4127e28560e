//! Main AI engine: difficulty policy and top-level entry points
//!
//! Each [`Difficulty`] maps to a [`SearchPolicy`]:
//!
//! | Difficulty | Algorithm | Depth |
//! |------------|-----------|-------|
//! | Medium     | Greedy    | 1     |
//! | Hard       | Minimax   | 3     |
//! | Expert     | Minimax   | 4     |
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let engine = AIEngine::new(Difficulty::Hard);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White);
//! println!("Best move: {}", result.best_move);
//! println!("Algorithm: {:?}", result.algorithm);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::ParseDifficultyError;
use crate::rules::has_winning_line;
use crate::search::{search_greedy, SearchResult, SearchStats, Searcher};

/// AI difficulty tiers, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

    /// Search policy for this tier
    pub fn policy(self) -> SearchPolicy {
        match self {
            Difficulty::Medium => SearchPolicy {
                algorithm: Algorithm::Greedy,
                depth: 1,
            },
            Difficulty::Hard => SearchPolicy {
                algorithm: Algorithm::Minimax,
                depth: 3,
            },
            Difficulty::Expert => SearchPolicy {
                algorithm: Algorithm::Minimax,
                depth: 4,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Search algorithm used by a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Evaluate every candidate once and keep the best
    Greedy,
    /// Minimax with alpha-beta pruning
    Minimax,
}

/// Algorithm and depth (in plies) for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub algorithm: Algorithm,
    pub depth: u8,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Recommended move; the engine never plays it on the caller's board
    pub best_move: Pos,
    /// Search score of the move
    pub score: f64,
    /// Algorithm that produced the move
    pub algorithm: Algorithm,
    /// Plies searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Main AI engine for Gomoku.
///
/// Stateless apart from its difficulty: repeated calls on the same board give
/// the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AIEngine {
    difficulty: Difficulty,
}

impl AIEngine {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Engine using the configured difficulty
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.difficulty)
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn policy(&self) -> SearchPolicy {
        self.difficulty.policy()
    }

    /// Get the best move for `player`.
    ///
    /// The board is used as scratch space during the search and is returned
    /// unchanged.
    #[must_use]
    pub fn get_move(&self, board: &mut Board, player: Stone) -> Pos {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// Callers must not pass a full board; check for a draw first.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &mut Board, player: Stone) -> MoveResult {
        debug_assert!(player != Stone::Empty, "no side to move");
        debug_assert!(!board.is_full(), "search on a full board");

        let start = Instant::now();
        let policy = self.policy();

        let result: SearchResult = match policy.algorithm {
            Algorithm::Greedy => search_greedy(board, player),
            Algorithm::Minimax => Searcher::new(player).search(board, policy.depth),
        };

        let best_move = result.best_move.unwrap_or_else(|| board.center());
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            difficulty = %self.difficulty,
            %player,
            %best_move,
            score = result.score,
            nodes = result.stats.nodes,
            time_ms,
            "engine move"
        );

        MoveResult {
            best_move,
            score: result.score,
            algorithm: policy.algorithm,
            depth: policy.depth,
            time_ms,
            stats: result.stats,
        }
    }
}

/// Empty `size` x `size` board
#[must_use]
pub fn create_empty_board(size: usize) -> Board {
    Board::with_size(size)
}

/// Whether the stone at `pos` completes five in a row. `pos` must be occupied.
#[must_use]
pub fn check_winner(board: &Board, pos: Pos) -> bool {
    has_winning_line(board, pos)
}

/// Recommended move for `player` at `difficulty`
#[must_use]
pub fn get_ai_move(board: &mut Board, player: Stone, difficulty: Difficulty) -> Pos {
    AIEngine::new(difficulty).get_move(board, player)
}
