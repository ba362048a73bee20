//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, outcome::Outcome};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// A single cell assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

impl Move {
    pub fn new(row: usize, col: usize, player: Player) -> Self {
        Self { row, col, player }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.player, self.row, self.col)
    }
}

/// A rectangular grid of cells
///
/// Cells are stored row-major. Dimensions never change once the board is
/// built, and every operation that changes a cell returns a new board, so
/// earlier snapshots stay valid for undo and for sibling search branches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `height` x `width` board.
    ///
    /// Both dimensions must be positive; use [`Board::try_new`] when they
    /// come from user input.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Cell::Empty)
    }

    /// Create a board with every cell set to `fill`
    pub fn filled(height: usize, width: usize, fill: Cell) -> Self {
        Board {
            height,
            width,
            cells: vec![fill; height * width],
        }
    }

    /// Create an empty board, rejecting zero dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] if either dimension is zero.
    pub fn try_new(height: usize, width: usize) -> Result<Self, crate::Error> {
        if height == 0 || width == 0 {
            return Err(crate::Error::InvalidDimensions { height, width });
        }
        Ok(Self::new(height, width))
    }

    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns error if there are no rows, the first row is empty, or any
    /// row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, crate::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(crate::Error::InvalidDimensions { height, width });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(crate::Error::RaggedRows {
                    row,
                    expected: width,
                    got: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Board {
            height,
            width,
            cells,
        })
    }

    /// Parse a board from rows separated by `/` or newlines.
    ///
    /// Whitespace inside a row is ignored, so `"X O ."` and `"XO."` are the
    /// same row. Empty cells may be written as `.`, `_` or `-`.
    ///
    /// # Errors
    ///
    /// Returns error if the string has no rows, contains an unknown
    /// character, or the rows have different lengths.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let mut rows = Vec::new();
        let mut position = 0;

        for raw_row in s.split(['/', '\n']) {
            let mut row = Vec::new();
            for c in raw_row.chars() {
                if c.is_whitespace() {
                    continue;
                }
                let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position,
                    context: s.to_string(),
                })?;
                row.push(cell);
                position += 1;
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        if rows.is_empty() {
            return Err(crate::Error::EmptyBoardString);
        }

        Self::from_rows(rows)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the board has both diagonals
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get the cell at (row, col), or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Cell lookup for coordinates already known to be in bounds
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Count the cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.count(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions as (row, col), row-major
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell.is_empty())
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Classify the board as in progress, won, or drawn
    pub fn evaluate(&self) -> Outcome {
        LineAnalyzer::evaluate(self)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.evaluate().winner()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.evaluate().is_terminal()
    }

    /// Moves available to `player` (none once the board is terminal)
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
            .into_iter()
            .map(|(row, col)| Move::new(row, col, player))
            .collect()
    }

    /// Apply a move and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns error if the board is already terminal, the target cell is
    /// out of bounds, or the target cell is occupied.
    #[must_use = "play returns a new board; the original is unchanged"]
    pub fn play(&self, mv: Move) -> Result<Board, crate::Error> {
        let outcome = self.evaluate();
        if outcome.is_terminal() {
            return Err(crate::Error::GameAlreadyOver { outcome });
        }

        let Move { row, col, player } = mv;
        match self.get(row, col) {
            None => Err(crate::Error::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            }),
            Some(Cell::Empty) => Ok(self.place(row, col, player)),
            Some(_) => Err(crate::Error::CellOccupied { row, col }),
        }
    }

    /// Copy the board with `player` marked at a known empty, in-bounds cell
    #[must_use = "place returns a new board; the original is unchanged"]
    pub(crate) fn place(&self, row: usize, col: usize, player: Player) -> Board {
        let mut next = self.clone();
        let idx = self.index(row, col);
        next.cells[idx] = player.to_cell();
        next
    }

    /// Infer whose turn it is from the piece counts when `first` opened.
    ///
    /// Returns `None` when the counts cannot come from alternating play.
    pub fn infer_turn(&self, first: Player) -> Option<Player> {
        let first_count = self.count(first.to_cell());
        let second_count = self.count(first.opponent().to_cell());

        if first_count == second_count {
            Some(first)
        } else if first_count == second_count + 1 {
            Some(first.opponent())
        } else {
            None
        }
    }

    /// Compact single-line encoding, rows joined by `/`
    pub fn encode(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = crate::Error;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
