//! Opponent port - abstraction for whatever chooses the computer's moves

use crate::{
    Result,
    tictactoe::{Board, Move, Player},
};

/// Opponent trait - anything that can choose a move for a board
///
/// The session owns one boxed opponent when computer assist is enabled and
/// asks it for a move whenever it is the computer's turn.
///
/// # Examples
///
/// ```
/// use gridtoe::{
///     Error, Result,
///     ports::Opponent,
///     tictactoe::{Board, Move, Player},
/// };
///
/// struct FirstEmpty;
///
/// impl Opponent for FirstEmpty {
///     fn select_move(&mut self, board: &Board, player: Player) -> Result<Move> {
///         board
///             .legal_moves(player)
///             .into_iter()
///             .next()
///             .ok_or(Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// let mv = FirstEmpty.select_move(&Board::new(3, 3), Player::O).unwrap();
/// assert_eq!((mv.row, mv.col), (0, 0));
/// ```
pub trait Opponent: Send {
    /// Select a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move is available (terminal board).
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move>;

    /// Get the opponent's name.
    fn name(&self) -> &str;
}
