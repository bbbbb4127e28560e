//! Candidate move generation
//!
//! Only empty cells touching at least one stone (any of the eight neighbors)
//! are considered. This bounds the branching factor by the stones in play
//! rather than the board size.

use crate::board::{Board, Pos};

/// Neighbor offsets, row-major
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether any of the eight cells around `pos` holds a stone
#[inline]
pub fn has_neighbor(board: &Board, pos: Pos) -> bool {
    NEIGHBORS.iter().any(|&(dr, dc)| {
        let r = pos.row as i32 + dr;
        let c = pos.col as i32 + dc;
        board.in_bounds(r, c) && !board.is_empty(Pos::new(r as u8, c as u8))
    })
}

/// All candidate moves in row-major order
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    board
        .positions()
        .filter(|&pos| board.is_empty(pos) && has_neighbor(board, pos))
        .collect()
}
