//! Winning line analysis for rectangular boards

use std::fmt;

use super::{Board, Cell, Outcome, Player};

/// A full-length line that can win the game
///
/// Diagonals only exist on square boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Line {
    /// (row, col) of every cell on the line, in order
    pub fn coordinates(self, board: &Board) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (height, width) = (board.height(), board.width());
        let len = match self {
            Line::Row(_) => width,
            Line::Column(_) | Line::Diagonal | Line::AntiDiagonal => height,
        };
        (0..len).map(move |i| match self {
            Line::Row(r) => (r, i),
            Line::Column(c) => (i, c),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, width - 1 - i),
        })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {r}"),
            Line::Column(c) => write!(f, "column {c}"),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// All lines of a board in scan order: rows, then columns, then diagonals
    pub fn lines(board: &Board) -> impl Iterator<Item = Line> {
        let rows = (0..board.height()).map(Line::Row);
        let columns = (0..board.width()).map(Line::Column);
        let diagonals: &[Line] = if board.is_square() {
            &[Line::Diagonal, Line::AntiDiagonal]
        } else {
            &[]
        };
        rows.chain(columns).chain(diagonals.iter().copied())
    }

    /// Cells along a line
    pub fn cells(board: &Board, line: Line) -> impl Iterator<Item = Cell> + '_ {
        line.coordinates(board).map(|(row, col)| board.at(row, col))
    }

    /// The player owning every cell of `line`, if any
    pub fn line_winner(board: &Board, line: Line) -> Option<Player> {
        let mut cells = Self::cells(board, line);
        let first = cells.next()?.to_player()?;
        let target = first.to_cell();
        cells.all(|c| c == target).then_some(first)
    }

    /// The first complete line in scan order and its owner
    pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
        Self::lines(board).find_map(|line| Self::line_winner(board, line).map(|p| (line, p)))
    }

    /// Classify the board.
    ///
    /// The first complete line found in row, column, diagonal order decides
    /// the winner. With no complete line a full board is a draw.
    pub fn evaluate(board: &Board) -> Outcome {
        if let Some((_, player)) = Self::winning_line(board) {
            Outcome::Winner(player)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}
