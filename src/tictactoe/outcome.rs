//! Terminal classification of a board

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// Status of a board: still being played, won, or drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Header line shown above a board: the winner, a draw, or whose turn it is
    pub fn status_line(self, turn: Player) -> String {
        match self {
            Outcome::Winner(player) => format!("{player} wins!"),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => format!("{turn}'s turn!"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
