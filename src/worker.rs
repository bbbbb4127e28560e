//! Background search
//!
//! Runs one engine search on a worker thread so an interactive caller can
//! keep its own loop responsive. The worker owns a copy of the board; only
//! the final [`MoveResult`] comes back over the channel.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Stone};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::SearchError;

/// Handle to a search running on another thread
pub struct SearchHandle {
    receiver: Receiver<MoveResult>,
    start_time: Instant,
}

impl SearchHandle {
    /// Start searching `board` for `player` at `difficulty`.
    ///
    /// The board is moved into the worker; the caller keeps its own copy.
    pub fn spawn(board: Board, player: Stone, difficulty: Difficulty) -> Self {
        let (tx, rx) = channel();
        let start_time = Instant::now();

        thread::spawn(move || {
            let mut board = board;
            let result = AIEngine::new(difficulty).get_move_with_stats(&mut board, player);
            // Receiver may have been dropped; nothing to do then
            let _ = tx.send(result);
        });

        debug!(%player, %difficulty, "background search started");
        Self {
            receiver: rx,
            start_time,
        }
    }

    /// Poll for the result without blocking.
    ///
    /// `Ok(None)` while the worker is still thinking.
    pub fn try_result(&self) -> Result<Option<MoveResult>, SearchError> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SearchError::Disconnected),
        }
    }

    /// Block until the worker finishes
    pub fn wait(self) -> Result<MoveResult, SearchError> {
        let result = self.receiver.recv().map_err(|_| SearchError::Disconnected)?;
        debug!(
            elapsed_ms = self.elapsed().as_millis() as u64,
            "background search finished"
        );
        Ok(result)
    }

    /// Time since the search was started, including thread startup
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_background_matches_foreground() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);

        let handle = SearchHandle::spawn(board.clone(), Stone::Black, Difficulty::Hard);
        let background = handle.wait().unwrap();

        let foreground = AIEngine::new(Difficulty::Hard).get_move(&mut board, Stone::Black);
        assert_eq!(background.best_move, foreground);
    }

    #[test]
    fn test_poll_until_done() {
        let handle = SearchHandle::spawn(Board::new(), Stone::Black, Difficulty::Expert);
        let result = loop {
            if let Some(result) = handle.try_result().unwrap() {
                break result;
            }
            thread::sleep(Duration::from_millis(1));
        };
        assert_eq!(result.best_move, Pos::new(7, 7));
        // The clock starts before the worker does
        assert!(handle.elapsed().as_millis() as u64 >= result.time_ms);
    }
}
