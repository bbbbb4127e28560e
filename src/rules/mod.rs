//! Game rules for standard Gomoku
//!
//! Five or more stones in a row along any line wins. There are no captures
//! and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_winning_line, DIRECTIONS};
