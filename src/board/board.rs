//! Board structure and the scoped placement guard used by search

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::BoardError;

/// Square game board of a configurable size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Empty board of the default size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Empty board of `size` x `size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn with_size(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "unsupported board size {size}"
        );
        let cells = size * size;
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell; `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Whether signed coordinates fall on this board
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col, self.size)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{pos} is off a {0}x{0} board", self.size);
        pos.to_index(self.size)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_checked(&self, row: i32, col: i32) -> Option<Stone> {
        if self.in_bounds(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone, replacing whatever occupied the cell
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Place `stone` on an empty cell for the lifetime of the returned guard.
    ///
    /// The cell is emptied again when the guard drops, on every exit path.
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> Placement<'_> {
        debug_assert!(self.is_empty(pos), "speculative stone on occupied {pos}");
        self.place_stone(pos, stone);
        Placement { board: self, pos }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Positions holding `stone`, row-major
    pub fn stone_positions(&self, stone: Stone) -> Vec<Pos> {
        match self.stones(stone) {
            Some(bb) => bb
                .iter_ones()
                .map(|idx| Pos::from_index(idx, self.size))
                .collect(),
            None => self.positions().filter(|&p| self.is_empty(p)).collect(),
        }
    }

    /// Same position with black and white exchanged
    pub fn swap_colors(&self) -> Board {
        Board {
            size: self.size,
            black: self.white.clone(),
            white: self.black.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let stone = self.get(Pos::new(row as u8, col as u8));
                write!(f, "{}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the text board format: one line per row, `.` empty, `X` black,
    /// `O` white. Blank lines and `#` comments are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if rows.is_empty() {
            return Err(BoardError::Empty);
        }
        let size = rows.len();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }

        let mut board = Board::with_size(size);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(BoardError::RaggedRow {
                    row,
                    len,
                    expected: size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let stone =
                    Stone::from_symbol(ch).ok_or(BoardError::InvalidCell { row, col, ch })?;
                if stone != Stone::Empty {
                    board.place_stone(Pos::new(row as u8, col as u8), stone);
                }
            }
        }
        Ok(board)
    }
}

/// A stone placed for the duration of a search branch.
///
/// Derefs to the board so evaluation and recursion can borrow through it;
/// dropping the guard empties the cell again.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    /// Cell occupied by this placement
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
