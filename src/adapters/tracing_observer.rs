//! Observer that reports game events through `tracing`.

use tracing::{debug, info};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, Move, Outcome},
};

/// Emits one event per game transition: starts and ends at info level,
/// moves and undos at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        info!(
            height = board.height(),
            width = board.width(),
            "game started"
        );
        Ok(())
    }

    fn on_move(&mut self, board: &Board, mv: Move) -> Result<()> {
        debug!(%mv, position = %board.encode(), "move played");
        Ok(())
    }

    fn on_game_end(&mut self, outcome: Outcome) -> Result<()> {
        info!(%outcome, "game over");
        Ok(())
    }

    fn on_undo(&mut self, board: &Board, undone: &[Move]) -> Result<()> {
        debug!(count = undone.len(), position = %board.encode(), "moves taken back");
        Ok(())
    }
}
