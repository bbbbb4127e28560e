//! Headless game flow
//!
//! Owns the board for a whole game, alternates turns and detects wins and
//! draws. The engine only recommends moves; this is the caller that applies
//! them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::GameError;
use crate::rules::find_winning_line;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Draw,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Stone,
    pub status: GameStatus,
    pub winner: Option<Stone>,
    pub winning_line: Option<Vec<Pos>>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_move: Option<Pos>,
}

impl GameState {
    /// New game on an empty `size` x `size` board, Black to move
    pub fn new(size: usize) -> Self {
        Self::from_board(Board::with_size(size), Stone::Black)
    }

    /// Continue from an existing position
    pub fn from_board(board: Board, to_move: Stone) -> Self {
        debug_assert!(to_move != Stone::Empty);
        Self {
            board,
            current_turn: to_move,
            status: GameStatus::Playing,
            winner: None,
            winning_line: None,
            move_history: Vec::new(),
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.board.size());
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Place a stone for the side to move.
    ///
    /// Returns the status after the move.
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }

        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        debug!(%color, %pos, moves = self.move_history.len(), "stone placed");

        if let Some(line) = find_winning_line(&self.board, pos) {
            info!(winner = %color, %pos, "five in a row");
            self.status = GameStatus::Won;
            self.winner = Some(color);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            info!("board full, draw");
            self.status = GameStatus::Draw;
        } else {
            self.current_turn = color.opponent();
        }

        Ok(self.status)
    }

    /// Let the engine choose and play the move for the side to move
    pub fn play_ai(&mut self, difficulty: Difficulty) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let result = AIEngine::new(difficulty).get_move_with_stats(&mut self.board, self.current_turn);
        self.play(result.best_move)?;
        Ok(result)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_board(Board::new(), Stone::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::default();
        assert_eq!(game.current_turn, Stone::Black);
        assert_eq!(game.status, GameStatus::Playing);
        assert!(game.board.is_board_empty());
        assert!(game.winner.is_none());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::default();
        assert_eq!(game.play(Pos::new(7, 7)), Ok(GameStatus::Playing));
        assert_eq!(game.current_turn, Stone::White);
        assert_eq!(game.play(Pos::new(7, 8)), Ok(GameStatus::Playing));
        assert_eq!(game.current_turn, Stone::Black);
        assert_eq!(
            game.move_history,
            vec![(Pos::new(7, 7), Stone::Black), (Pos::new(7, 8), Stone::White)]
        );
        assert_eq!(game.last_move, Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_rejects_occupied_and_out_of_bounds() {
        let mut game = GameState::default();
        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(game.play(Pos::new(7, 7)), Err(GameError::Occupied(Pos::new(7, 7))));
        assert_eq!(
            game.play(Pos::new(15, 0)),
            Err(GameError::OutOfBounds(Pos::new(15, 0)))
        );
        // Rejected moves keep the turn
        assert_eq!(game.current_turn, Stone::White);
    }

    #[test]
    fn test_win_detected() {
        let mut game = GameState::default();
        for c in 0..4 {
            game.play(Pos::new(0, c)).unwrap();
            game.play(Pos::new(1, c)).unwrap();
        }
        assert_eq!(game.play(Pos::new(0, 4)), Ok(GameStatus::Won));
        assert_eq!(game.winner, Some(Stone::Black));
        assert_eq!(game.winning_line.as_ref().map(Vec::len), Some(5));
        assert_eq!(game.play(Pos::new(5, 5)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_detected() {
        // Last empty cell of a 5x5 board with no five anywhere
        let layout = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOO."];
        let mut board = Board::with_size(5);
        for (r, line) in layout.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if let Some(stone) = Stone::from_symbol(ch) {
                    if stone != Stone::Empty {
                        board.place_stone(Pos::new(r as u8, c as u8), stone);
                    }
                }
            }
        }
        let mut game = GameState::from_board(board, Stone::White);
        assert_eq!(game.play(Pos::new(4, 4)), Ok(GameStatus::Draw));
        assert!(game.winner.is_none());
        assert!(game.is_over());
    }

    #[test]
    fn test_play_ai_applies_move() {
        let mut game = GameState::default();
        let result = game.play_ai(Difficulty::Medium).unwrap();
        assert_eq!(result.best_move, Pos::new(7, 7));
        assert_eq!(game.board.get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.current_turn, Stone::White);
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new(19);
        game.play(Pos::new(9, 9)).unwrap();
        game.reset();
        assert!(game.board.is_board_empty());
        assert_eq!(game.board.size(), 19);
        assert_eq!(game.current_turn, Stone::Black);
        assert!(game.move_history.is_empty());
    }
}
