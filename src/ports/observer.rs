//! Observer port - abstraction for reacting to game events
//!
//! Observers let the presentation layer (terminal rendering, logging) follow
//! a session without the session knowing how anything is displayed.

use crate::{
    Result,
    tictactoe::{Board, Move, Outcome},
};

/// Observer trait for following a game session
///
/// # Event Sequence
///
/// 1. `on_game_start(board)` - when the observer is attached and after every reset
/// 2. `on_move(board, mv)` - after each accepted move, with the new board
/// 3. `on_game_end(outcome)` - once the board becomes terminal
///
/// `on_undo(board, undone)` can arrive between moves or after the end.
///
/// An error from any hook is logged by the session and never rolls back
/// the transition it reports; later observers are still notified.
///
/// # Examples
///
/// ```
/// use gridtoe::{ports::GameObserver, tictactoe::Outcome};
///
/// struct Tally {
///     finished: usize,
/// }
///
/// impl GameObserver for Tally {
///     fn on_game_end(&mut self, _outcome: Outcome) -> gridtoe::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait GameObserver: Send {
    /// Called with the empty board of a new game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_game_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied.
    ///
    /// # Parameters
    ///
    /// * `board` - Board state after the move
    /// * `mv` - The move that was played
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_move(&mut self, _board: &Board, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called when the game reaches a win or a draw.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_game_end(&mut self, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Called after moves were taken back.
    ///
    /// # Parameters
    ///
    /// * `board` - Board state after the undo
    /// * `undone` - Moves taken back, most recent first
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_undo(&mut self, _board: &Board, _undone: &[Move]) -> Result<()> {
        Ok(())
    }
}
