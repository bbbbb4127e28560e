//! Position evaluation for Gomoku
//!
//! Contains:
//! - Pattern score table
//! - Per-cell heuristic evaluation (center bias, offense, defense)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_score, evaluate_direction, evaluate_position};
pub use patterns::{pattern_score, PatternScore};
