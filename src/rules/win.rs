//! Win condition checking
//!
//! A move wins when the stone just placed completes five or more in a row
//! horizontally, vertically or along either diagonal.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Down a column
    (0, 1),  // Along a row
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Count same-colored stones from `pos` along `(dr, dc)`, not counting `pos`.
/// Stops after `WIN_LENGTH - 1` steps.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    for i in 1..WIN_LENGTH as i32 {
        let r = pos.row as i32 + dr * i;
        let c = pos.col as i32 + dc * i;
        if board.get_checked(r, c) != Some(color) {
            break;
        }
        count += 1;
    }
    count
}

/// Five-in-a-row check through an occupied position.
///
/// Only the four lines through `pos` are inspected. Asking about an empty
/// cell is a caller bug: debug builds panic, release builds return false.
#[inline]
pub fn has_winning_line(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    debug_assert!(color != Stone::Empty, "win check on empty {pos}");
    if color == Stone::Empty {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + run_length(board, pos, dr, dc, color)
            + run_length(board, pos, -dr, -dc, color);
        count >= WIN_LENGTH
    })
}

/// Find the winning line through `pos`, if any.
///
/// Returns every contiguous stone of the line (at least five), ordered from
/// the backward end to the forward end.
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let mut r = pos.row as i32 - dr;
        let mut c = pos.col as i32 - dc;
        while board.get_checked(r, c) == Some(color) {
            line.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }

        // Extend in positive direction
        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        while board.get_checked(r, c) == Some(color) {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
