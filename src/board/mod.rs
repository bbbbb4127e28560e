//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Placement};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Smallest board that can still hold a five-in-a-row
pub const MIN_BOARD_SIZE: usize = WIN_LENGTH;

/// Largest supported board; keeps every coordinate inside a `u8`
pub const MAX_BOARD_SIZE: usize = 25;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used by the text board format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }

    /// Inverse of [`Stone::symbol`], also accepting a few common empty markers
    pub fn from_symbol(c: char) -> Option<Stone> {
        match c {
            'X' | 'x' => Some(Stone::Black),
            'O' | 'o' => Some(Stone::White),
            '.' | '+' | '_' => Some(Stone::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stone::Black => "black",
            Stone::White => "white",
            Stone::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < MAX_BOARD_SIZE as u8 && col < MAX_BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
