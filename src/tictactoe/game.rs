//! High-level game management

use std::fmt;

use tracing::{debug, instrument, warn};

use super::{
    board::{Board, Move, Player},
    outcome::Outcome,
};
use crate::{
    Result,
    adapters::MinimaxOpponent,
    app::GameConfig,
    ports::{GameObserver, Opponent},
    search,
};

/// Board and turn before a move, kept for undo
#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    turn: Player,
    mv: Move,
}

/// A game session: current board, turn, history and optional computer player
///
/// Every accepted move replaces the board with a new snapshot; the previous
/// one goes on the history stack untouched.
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: Player,
    history: Vec<Snapshot>,
    opponent: Option<Box<dyn Opponent>>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Start a game from a configuration.
    ///
    /// Installs a [`MinimaxOpponent`] when the configuration names a
    /// computer player.
    ///
    /// # Errors
    ///
    /// Returns error if the configured board has a zero dimension.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let opponent = config
            .computer
            .map(|_| Box::new(MinimaxOpponent::default()) as Box<dyn Opponent>);

        Ok(Game {
            board: Board::new(config.board_height(), config.width),
            turn: config.first_player,
            history: Vec::new(),
            opponent,
            observers: Vec::new(),
            config,
        })
    }

    /// Replace the computer's move selection.
    ///
    /// Only consulted when the configuration names a computer player.
    pub fn with_opponent(mut self, opponent: Box<dyn Opponent>) -> Self {
        self.opponent = Some(opponent);
        self
    }

    /// Attach an observer and send it the current board as a game start.
    ///
    /// # Errors
    ///
    /// Returns whatever the observer returns from `on_game_start`.
    pub fn add_observer(&mut self, mut observer: Box<dyn GameObserver>) -> Result<()> {
        observer.on_game_start(&self.board)?;
        self.observers.push(observer);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Moves played so far, oldest first
    pub fn moves(&self) -> Vec<Move> {
        self.history.iter().map(|s| s.mv).collect()
    }

    /// Name of the installed opponent, if computer assist is on
    pub fn opponent_name(&self) -> Option<&str> {
        self.config.computer?;
        self.opponent.as_deref().map(|o| o.name())
    }

    /// Whether the next move belongs to the computer
    pub fn is_computer_turn(&self) -> bool {
        self.config.computer == Some(self.turn) && !self.outcome().is_terminal()
    }

    /// Play the current player's mark at (row, col).
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or the cell is out of
    /// bounds or occupied. The session is unchanged on error.
    ///
    /// Observers hear about the move only after it is applied; an observer
    /// failure is logged and does not turn an accepted move into an error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome> {
        let mv = Move::new(row, col, self.turn);
        let next = self.board.play(mv).inspect_err(|e| {
            warn!(error = %e, "rejected move");
        })?;

        let previous = std::mem::replace(&mut self.board, next);
        self.history.push(Snapshot {
            board: previous,
            turn: self.turn,
            mv,
        });
        self.turn = self.turn.opponent();

        let outcome = self.board.evaluate();
        debug!(%mv, %outcome, "move accepted");

        let board = &self.board;
        notify(&mut self.observers, "move", |o| o.on_move(board, mv));
        if outcome.is_terminal() {
            notify(&mut self.observers, "game end", |o| o.on_game_end(outcome));
        }

        Ok(outcome)
    }

    /// Let the computer play if it is its turn.
    ///
    /// Returns the move played, or `None` when computer assist is off, the
    /// game is over, or it is a human's turn.
    ///
    /// # Errors
    ///
    /// Returns error if the opponent fails to produce a legal move.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn computer_move(&mut self) -> Result<Option<Move>> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(opponent) = self.opponent.as_mut() else {
            return Ok(None);
        };

        let mv = opponent.select_move(&self.board, self.turn)?;
        self.play(mv.row, mv.col)?;
        Ok(Some(mv))
    }

    /// The search's choice for `player` on the current board, without playing it
    pub fn suggest(&self, player: Player) -> Option<Move> {
        search::best_action(&self.board, player).map(|choice| choice.mv)
    }

    /// Take back the last move.
    ///
    /// With computer assist on, taking back a computer move also takes back
    /// the human move before it, so the human is to move again. When the
    /// computer opened, undoing its first move leaves it to move again, and
    /// the next [`Game::computer_move`] replays the same deterministic choice.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NothingToUndo`] when no move has been played.
    pub fn undo(&mut self) -> Result<Vec<Move>> {
        let mut last = self.history.pop().ok_or(crate::Error::NothingToUndo)?;
        let mut undone = vec![last.mv];

        if self.config.computer == Some(last.mv.player) {
            if let Some(before) = self.history.pop() {
                undone.push(before.mv);
                last = before;
            }
        }

        self.board = last.board;
        self.turn = last.turn;
        debug!(?undone, "undo");

        let board = &self.board;
        notify(&mut self.observers, "undo", |o| o.on_undo(board, &undone));
        Ok(undone)
    }

    /// Clear the board and history; the first player moves again.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.board_height(), self.config.width);
        self.turn = self.config.first_player;
        self.history.clear();

        let board = &self.board;
        notify(&mut self.observers, "game start", |o| o.on_game_start(board));
    }
}

/// Deliver one event to every observer, logging failures instead of
/// stopping at the first one
fn notify(
    observers: &mut [Box<dyn GameObserver>],
    event: &str,
    mut deliver: impl FnMut(&mut dyn GameObserver) -> Result<()>,
) {
    for observer in observers {
        if let Err(e) = deliver(observer.as_mut()) {
            warn!(error = %e, event, "observer failed");
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("board", &self.board.encode())
            .field("turn", &self.turn)
            .field("moves", &self.history.len())
            .field("opponent", &self.opponent_name())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        adapters::{GameEvent, RecordingObserver},
        tictactoe::Cell,
    };

    fn two_humans() -> Game {
        Game::new(GameConfig::new(3).without_computer()).unwrap()
    }

    #[test]
    fn new_game_is_empty_with_first_player_to_move() {
        let config = GameConfig::new(4)
            .with_height(2)
            .with_first_player(Player::O);
        let game = Game::new(config).unwrap();
        assert_eq!(game.board().height(), 2);
        assert_eq!(game.board().width(), 4);
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn new_game_rejects_empty_board() {
        assert!(matches!(
            Game::new(GameConfig::new(0)),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn play_alternates_turns() {
        let mut game = two_humans();
        game.play(0, 0).unwrap();
        assert_eq!(game.turn(), Player::O);
        game.play(1, 1).unwrap();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.board().get(0, 0), Some(Cell::X));
        assert_eq!(game.board().get(1, 1), Some(Cell::O));
    }

    #[test]
    fn rejected_move_leaves_session_unchanged() {
        let mut game = two_humans();
        game.play(0, 0).unwrap();

        assert!(matches!(game.play(0, 0), Err(Error::CellOccupied { .. })));
        assert!(matches!(game.play(3, 0), Err(Error::OutOfBounds { .. })));
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn play_after_win_is_rejected() {
        let mut game = two_humans();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.play(0, 2).unwrap(), Outcome::Winner(Player::X));
        assert!(matches!(
            game.play(2, 2),
            Err(Error::GameAlreadyOver {
                outcome: Outcome::Winner(Player::X)
            })
        ));
    }

    #[test]
    fn computer_answers_on_its_turn_only() {
        let mut game = Game::new(GameConfig::new(3)).unwrap();
        assert_eq!(game.computer_move().unwrap(), None);

        game.play(0, 0).unwrap();
        assert!(game.is_computer_turn());

        let mv = game.computer_move().unwrap().unwrap();
        assert_eq!(mv.player, Player::O);
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn computer_disabled_never_moves() {
        let mut game = two_humans();
        game.play(1, 1).unwrap();
        assert!(!game.is_computer_turn());
        assert_eq!(game.computer_move().unwrap(), None);
        assert_eq!(game.opponent_name(), None);
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut game = two_humans();
        game.play(0, 0).unwrap();
        let before = game.board().clone();
        game.play(2, 2).unwrap();

        let undone = game.undo().unwrap();
        assert_eq!(undone, vec![Move::new(2, 2, Player::O)]);
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn undo_takes_back_computer_reply_with_human_move() {
        let mut game = Game::new(GameConfig::new(3)).unwrap();
        game.play(1, 1).unwrap();
        game.computer_move().unwrap();

        let undone = game.undo().unwrap();
        assert_eq!(undone.len(), 2);
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn undo_on_fresh_game_fails() {
        let mut game = two_humans();
        assert!(matches!(game.undo(), Err(Error::NothingToUndo)));
    }

    #[test]
    fn reset_clears_board_and_history() {
        let mut game = two_humans();
        game.play(0, 0).unwrap();
        game.play(0, 1).unwrap();
        game.reset();

        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.turn(), Player::X);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn suggest_does_not_play() {
        let mut game = two_humans();
        game.play(0, 0).unwrap();
        game.play(1, 1).unwrap();
        game.play(0, 1).unwrap();

        assert_eq!(game.suggest(Player::O), Some(Move::new(0, 2, Player::O)));
        assert_eq!(game.board().occupied_count(), 3);
    }

    #[test]
    fn observers_see_start_moves_and_end() {
        let recorder = RecordingObserver::new();
        let mut game = two_humans();
        game.add_observer(Box::new(recorder.clone())).unwrap();

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(row, col).unwrap();
        }
        game.reset();

        let events = recorder.events();
        assert_eq!(events.len(), 8);
        assert!(matches!(events[0], GameEvent::Started(_)));
        assert_eq!(events[1], GameEvent::Moved(Move::new(0, 0, Player::X)));
        assert_eq!(events[6], GameEvent::Ended(Outcome::Winner(Player::X)));
        assert!(matches!(events[7], GameEvent::Started(_)));
    }

    struct Failing;

    impl GameObserver for Failing {
        fn on_move(&mut self, _board: &Board, _mv: Move) -> Result<()> {
            Err(Error::NoValidMoves)
        }

        fn on_undo(&mut self, _board: &Board, _undone: &[Move]) -> Result<()> {
            Err(Error::NothingToUndo)
        }
    }

    #[test]
    fn failing_observer_does_not_reject_an_applied_move() {
        let recorder = RecordingObserver::new();
        let mut game = two_humans();
        game.add_observer(Box::new(Failing)).unwrap();
        game.add_observer(Box::new(recorder.clone())).unwrap();

        assert_eq!(game.play(0, 0).unwrap(), Outcome::InProgress);
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.moves(), vec![Move::new(0, 0, Player::X)]);

        // The observer after the failing one still hears about the move.
        assert_eq!(
            recorder.events().last(),
            Some(&GameEvent::Moved(Move::new(0, 0, Player::X)))
        );

        assert_eq!(game.undo().unwrap().len(), 1);
        assert_eq!(
            recorder.events().last(),
            Some(&GameEvent::Undone(vec![Move::new(0, 0, Player::X)]))
        );
    }

    #[test]
    fn observers_see_undo_of_computer_reply() {
        let recorder = RecordingObserver::new();
        let mut game = Game::new(GameConfig::new(3)).unwrap();
        game.add_observer(Box::new(recorder.clone())).unwrap();

        game.play(1, 1).unwrap();
        let reply = game.computer_move().unwrap().unwrap();
        game.undo().unwrap();

        assert_eq!(
            recorder.events().last(),
            Some(&GameEvent::Undone(vec![reply, Move::new(1, 1, Player::X)]))
        );
    }

    #[test]
    fn undoing_computer_opening_hands_turn_back_to_computer() {
        let config = GameConfig::new(3)
            .with_computer(Player::X)
            .with_first_player(Player::X);
        let mut game = Game::new(config).unwrap();
        let opening = game.computer_move().unwrap().unwrap();

        assert_eq!(game.undo().unwrap(), vec![opening]);
        assert!(game.is_computer_turn());
        assert_eq!(game.computer_move().unwrap(), Some(opening));
    }
}
