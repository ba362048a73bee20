//! Opponent backed by the exhaustive minimax search.

use crate::{
    Result,
    ports::Opponent,
    search,
    tictactoe::{Board, Move, Player},
};

/// Computer opponent that always plays the search's best move.
///
/// Stateless: every call runs a fresh full-depth search.
#[derive(Debug, Clone)]
pub struct MinimaxOpponent {
    name: String,
}

impl MinimaxOpponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MinimaxOpponent {
    fn default() -> Self {
        Self::new("Minimax")
    }
}

impl Opponent for MinimaxOpponent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Move> {
        search::best_action(board, player)
            .map(|choice| choice.mv)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
