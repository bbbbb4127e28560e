//! Heuristic evaluation of a single cell
//!
//! Scores how good an empty cell is for a player from three terms:
//! - Center proximity
//! - Offensive line patterns through the cell
//! - A weighted bonus for blocking the opponent's strong patterns
//!
//! Both functions are read-only over the board. To ask "what if I play here",
//! place the stone, evaluate, then remove it.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{pattern_score, PatternScore};

/// Maximum steps scanned on each side of the cell
const SCAN_STEPS: i32 = 5;

/// Outcome of scanning one side of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HalfRun {
    own: u32,
    blocked: bool,
}

/// Walk from `pos` along `(dr, dc)`, counting `player`'s stones until the
/// first empty cell (open end) or opponent stone / edge (blocked end).
fn scan_half(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> HalfRun {
    let mut own = 0;
    for i in 1..=SCAN_STEPS {
        let r = pos.row as i32 + dr * i;
        let c = pos.col as i32 + dc * i;
        match board.get_checked(r, c) {
            Some(s) if s == player => own += 1,
            Some(Stone::Empty) => return HalfRun { own, blocked: false },
            Some(_) | None => return HalfRun { own, blocked: true },
        }
    }
    HalfRun { own, blocked: false }
}

/// Score the line through `pos` along `(dr, dc)` for `player`.
///
/// The cell itself is not counted; only the stones on either side of it.
#[must_use]
pub fn evaluate_direction(board: &Board, pos: Pos, dr: i32, dc: i32, player: Stone) -> f64 {
    let forward = scan_half(board, pos, dr, dc, player);
    let backward = scan_half(board, pos, -dr, -dc, player);

    let own_count = forward.own + backward.own;
    let blocked = u32::from(forward.blocked) + u32::from(backward.blocked);
    pattern_score(own_count, blocked)
}

/// Center-proximity term: 10 at the center, falling linearly with Manhattan
/// distance to 0 at the corners.
#[must_use]
pub fn center_score(board: &Board, pos: Pos) -> f64 {
    let center = (board.size() - 1) as f64 / 2.0;
    let dist = (f64::from(pos.row) - center).abs() + (f64::from(pos.col) - center).abs();
    (1.0 - dist / (2.0 * center)) * PatternScore::CENTER_WEIGHT
}

/// Evaluate the cell at `pos` for `player`.
///
/// Returns center proximity, plus the offensive pattern score in all four
/// directions, plus 0.8x every opponent pattern through the cell that is an
/// open three or stronger. Higher is better for `player`.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, player: Stone) -> f64 {
    let mut score = center_score(board, pos);

    for &(dr, dc) in &DIRECTIONS {
        score += evaluate_direction(board, pos, dr, dc, player);
    }

    let opponent = player.opponent();
    for &(dr, dc) in &DIRECTIONS {
        let threat = evaluate_direction(board, pos, dr, dc, opponent);
        if threat >= PatternScore::THREAT_THRESHOLD {
            score += threat * PatternScore::DEFENSE_WEIGHT;
        }
    }

    score
}
