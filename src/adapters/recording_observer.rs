//! In-memory observer that records every game event.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, Move, Outcome},
};

/// A single observed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started(Board),
    Moved(Move),
    Ended(Outcome),
    /// Moves taken back, most recent first
    Undone(Vec<Move>),
}

/// Observer that stores events in shared memory.
///
/// All clones share the same event list, so a test can keep one clone and
/// hand the other to a [`Game`](crate::Game).
///
/// # Examples
///
/// ```
/// use gridtoe::{
///     Game,
///     adapters::{GameEvent, RecordingObserver},
///     app::GameConfig,
/// };
///
/// let recorder = RecordingObserver::new();
/// let mut game = Game::new(GameConfig::new(3).without_computer())?;
/// game.add_observer(Box::new(recorder.clone()))?;
/// game.play(1, 1)?;
///
/// assert_eq!(recorder.events().len(), 2);
/// assert!(matches!(recorder.events()[1], GameEvent::Moved(_)));
/// # Ok::<(), gridtoe::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, event: GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl GameObserver for RecordingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        self.push(GameEvent::Started(board.clone()));
        Ok(())
    }

    fn on_move(&mut self, _board: &Board, mv: Move) -> Result<()> {
        self.push(GameEvent::Moved(mv));
        Ok(())
    }

    fn on_game_end(&mut self, outcome: Outcome) -> Result<()> {
        self.push(GameEvent::Ended(outcome));
        Ok(())
    }

    fn on_undo(&mut self, _board: &Board, undone: &[Move]) -> Result<()> {
        self.push(GameEvent::Undone(undone.to_vec()));
        Ok(())
    }
}
