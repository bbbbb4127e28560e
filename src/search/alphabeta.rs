//! Minimax search with alpha-beta pruning
//!
//! This module implements the look-ahead search used by the harder tiers.
//!
//! # Scoring
//!
//! Every node places the side to move on each candidate and scores that cell
//! with [`evaluate_position`]. A candidate's value is its own immediate score
//! plus the value returned by the subtree below it, and leaves are worth 0.
//! The maximizing side keeps the largest sum and the minimizing side the
//! smallest.
//!
//! A candidate whose immediate score reaches [`PatternScore::WIN_THRESHOLD`]
//! ends the node at once: it is returned without searching its subtree or
//! its remaining siblings.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(Stone::White);
//! let result = searcher.search(&mut board, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_position, PatternScore};

use super::{generate_candidates, SearchResult, SearchStats};

/// Infinity score for alpha-beta bounds
const INF: f64 = f64::INFINITY;

/// Best move and value of one node
#[derive(Debug, Clone, Copy)]
struct Node {
    best_move: Option<Pos>,
    score: f64,
}

impl Node {
    const LEAF: Node = Node {
        best_move: None,
        score: 0.0,
    };
}

/// Depth-limited minimax searcher for one side.
///
/// The searcher borrows the board mutably for the duration of a search and
/// returns it unchanged; speculative stones are placed through
/// [`Board::place_scoped`].
#[derive(Debug, Clone)]
pub struct Searcher {
    player: Stone,
    opponent: Stone,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher that maximizes for `player`
    #[must_use]
    pub fn new(player: Stone) -> Self {
        debug_assert!(player != Stone::Empty);
        Self {
            player,
            opponent: player.opponent(),
            stats: SearchStats::default(),
        }
    }

    /// Side being maximized
    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    /// Statistics of the last search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies from the root with a full window.
    ///
    /// A depth of 0 yields no move. With no candidates the board center is
    /// returned with a score of 0.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();

        let node = self.minimax(board, depth, -INF, INF, true, true);

        debug!(
            player = %self.player,
            depth,
            best_move = ?node.best_move,
            score = node.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            short_circuits = self.stats.short_circuits,
            "alpha-beta search done"
        );

        SearchResult {
            best_move: node.best_move,
            score: node.score,
            depth,
            stats: self.stats,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        is_root: bool,
    ) -> Node {
        self.stats.nodes += 1;

        if depth == 0 {
            return Node::LEAF;
        }

        let moves = generate_candidates(board);
        let Some(&first) = moves.first() else {
            return Node {
                best_move: Some(board.center()),
                score: 0.0,
            };
        };

        let side = if maximizing { self.player } else { self.opponent };
        let mut best_move = first;
        let mut best_score = if maximizing { -INF } else { INF };

        for pos in moves {
            let mut placed = board.place_scoped(pos, side);
            let immediate = evaluate_position(&placed, pos, side);

            if immediate >= PatternScore::WIN_THRESHOLD {
                self.stats.short_circuits += 1;
                return Node {
                    best_move: Some(pos),
                    score: immediate,
                };
            }

            let child = self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing, false);
            drop(placed);

            let total = immediate + child.score;
            if is_root {
                trace!(%pos, immediate, total, "root candidate");
            }

            if maximizing {
                if total > best_score {
                    best_score = total;
                    best_move = pos;
                }
                alpha = alpha.max(best_score);
            } else {
                if total < best_score {
                    best_score = total;
                    best_move = pos;
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Node {
            best_move: Some(best_move),
            score: best_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(board: &mut Board, row: u8, cols: std::ops::Range<u8>, color: Stone) {
        for c in cols {
            board.place_stone(Pos::new(row, c), color);
        }
    }

    #[test]
    fn test_search_empty_board() {
        let mut board = Board::new();
        let mut searcher = Searcher::new(Stone::Black);
        let result = searcher.search(&mut board, 3);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let mut searcher = Searcher::new(Stone::White);
        let result = searcher.search(&mut board, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = Board::new();
        line(&mut board, 7, 3..7, Stone::Black);
        board.place_stone(Pos::new(0, 0), Stone::White);

        let before = board.clone();

        for depth in [3, 4] {
            let mut searcher = Searcher::new(Stone::Black);
            let result = searcher.search(&mut board, depth);
            let best = result.best_move.unwrap();
            assert!(best == Pos::new(7, 2) || best == Pos::new(7, 7), "got {best}");
            assert!(result.score >= 10_000.0);
            assert!(result.stats.short_circuits >= 1);
            // Early return still lifts the winning stone
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_search_blocks_open_four() {
        let mut board = Board::new();
        line(&mut board, 7, 3..7, Stone::Black);
        let before = board.clone();

        for depth in [3, 4] {
            let mut searcher = Searcher::new(Stone::White);
            let result = searcher.search(&mut board, depth);
            let best = result.best_move.unwrap();
            assert!(best == Pos::new(7, 2) || best == Pos::new(7, 7), "got {best}");
            // Black's completing replies end their nodes early
            assert!(result.stats.short_circuits >= 1);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let before = board.clone();

        // One ply: the four orthogonal neighbours score the same, and the
        // first of them in row-major order wins
        let mut searcher = Searcher::new(Stone::White);
        assert_eq!(searcher.player(), Stone::White);
        let result = searcher.search(&mut board, 1);
        assert_eq!(result.best_move, Some(Pos::new(6, 7)));
        assert_eq!(searcher.stats(), result.stats);
        assert_eq!(searcher.stats().nodes, 9);

        let result = searcher.search(&mut board, 3);
        assert_eq!(result.best_move, Some(Pos::new(8, 7)));
        assert_eq!(searcher.stats(), result.stats);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(6, 8), Stone::Black);
        let before = board.clone();

        let mut searcher = Searcher::new(Stone::White);
        let _ = searcher.search(&mut board, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);

        let first = Searcher::new(Stone::Black).search(&mut board, 3);
        let second = Searcher::new(Stone::Black).search(&mut board, 3);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_pruning_happens() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);

        let mut searcher = Searcher::new(Stone::Black);
        let result = searcher.search(&mut board, 3);
        assert!(result.stats.cutoffs > 0);
        assert!(result.stats.nodes > 1);
    }
}
