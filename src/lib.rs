//! Generalized tic-tac-toe with an exhaustive minimax opponent
//!
//! This crate provides:
//! - An N×M rules engine: boards, turn alternation, win and draw detection
//! - A full-depth minimax search that prefers quick wins and slow losses
//! - A game session with computer assist, undo and reset
//! - A terminal CLI built on top of the session

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use app::GameConfig;
pub use error::{Error, Result};
pub use search::{ScoredMove, SearchResult, best_action, best_move};
pub use tictactoe::{Board, Cell, Game, Move, Outcome, Player};
