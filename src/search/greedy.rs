//! One-ply greedy search
//!
//! Every candidate is tried once for the mover and scored with
//! [`evaluate_position`]; the highest score wins, earliest candidate on ties.

use tracing::{debug, trace};

use crate::board::{Board, Stone};
use crate::eval::evaluate_position;

use super::{generate_candidates, SearchResult, SearchStats};

/// Pick the best single move for `player` without looking ahead.
///
/// On an empty board (no candidates), or when every cell is a candidate, the
/// center is returned with a score of 0. The board is left as it was.
pub fn search_greedy(board: &mut Board, player: Stone) -> SearchResult {
    let moves = generate_candidates(board);
    let cells = board.size() * board.size();

    if moves.is_empty() || moves.len() == cells {
        return SearchResult {
            best_move: Some(board.center()),
            score: 0.0,
            depth: 1,
            stats: SearchStats::default(),
        };
    }

    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut best_score = f64::NEG_INFINITY;

    for pos in moves {
        let placed = board.place_scoped(pos, player);
        let score = evaluate_position(&placed, pos, player);
        drop(placed);
        stats.nodes += 1;
        trace!(%pos, score, "greedy candidate");

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    debug!(
        ?best_move,
        score = best_score,
        nodes = stats.nodes,
        "greedy search done"
    );

    SearchResult {
        best_move,
        score: best_score,
        depth: 1,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_empty_board_center() {
        let mut board = Board::new();
        let result = search_greedy(&mut board, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_empty_board_center_other_size() {
        let mut board = Board::with_size(19);
        let result = search_greedy(&mut board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(9, 9)));
    }

    #[test]
    fn test_single_stone_prefers_first_best() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let result = search_greedy(&mut board, Stone::White);
        // Four orthogonal neighbors tie; row-major order picks the upper one
        assert_eq!(result.best_move, Some(Pos::new(6, 7)));
        assert_eq!(result.stats.nodes, 8);
    }

    #[test]
    fn test_completes_own_four() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(0, 0), Stone::White);
        let result = search_greedy(&mut board, Stone::Black);
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(7, 2) || best == Pos::new(7, 7), "got {best}");
        assert!(result.score >= 10_000.0);
    }

    #[test]
    fn test_blocks_open_four() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        let result = search_greedy(&mut board, Stone::White);
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(7, 2) || best == Pos::new(7, 7), "got {best}");
    }

    #[test]
    fn test_board_restored() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        let before = board.clone();
        let _ = search_greedy(&mut board, Stone::Black);
        assert_eq!(board, before);
    }
}
