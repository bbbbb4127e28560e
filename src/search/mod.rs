//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation restricted to cells next to existing stones
//! - One-ply greedy search
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod greedy;
pub mod movegen;

pub use alphabeta::Searcher;
pub use greedy::search_greedy;
pub use movegen::{generate_candidates, has_neighbor};

use crate::board::Pos;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (greedy: candidates evaluated)
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Nodes that returned early on a winning pattern
    pub short_circuits: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move
    pub score: f64,
    /// Plies searched
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}
