//! Subcommands of the `gridtoe` binary

pub mod best_move;
pub mod evaluate;
pub mod play;

use anyhow::{Result, anyhow};

use crate::tictactoe::{Board, Player};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub(crate) fn parse_board(value: &str) -> Result<Board> {
    Board::from_string(value).map_err(|e| anyhow!("Invalid board '{value}': {e}"))
}
