//! Rules engine: board, lines, outcomes and the game session

pub mod board;
pub mod game;
pub mod lines;
pub mod outcome;

pub use board::{Board, Cell, Move, Player};
pub use game::Game;
pub use lines::{Line, LineAnalyzer};
pub use outcome::Outcome;
