//! Minimax with path-length tie-breaking

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::tictactoe::{Board, Cell, Move, Outcome, Player};

pub const X_WIN_VALUE: f64 = 1.0;
pub const O_WIN_VALUE: f64 = -1.0;
/// Draws score weakly positive: above a loss for O, below a win for X.
pub const DRAW_VALUE: f64 = 0.1;

/// Most empty cells a search can face and still answer interactively
pub const EXHAUSTIVE_CELL_LIMIT: usize = 9;

/// Value of a position together with the plies needed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    /// +1 when X wins, -1 when O wins, [`DRAW_VALUE`] for a draw
    pub value: f64,
    /// Depth at which the chosen line reaches its terminal board
    pub steps: usize,
}

impl SearchResult {
    /// Leaf score for a terminal outcome, `None` while the game is in progress
    pub fn terminal(outcome: Outcome, depth: usize) -> Option<Self> {
        let value = match outcome {
            Outcome::Winner(Player::X) => X_WIN_VALUE,
            Outcome::Winner(Player::O) => O_WIN_VALUE,
            Outcome::Draw => DRAW_VALUE,
            Outcome::InProgress => return None,
        };
        Some(SearchResult {
            value,
            steps: depth,
        })
    }

    /// Whether the value is good news for `player`.
    ///
    /// X wants positive values and O wants negative ones, so a draw counts
    /// as favoring X.
    pub fn favors(&self, player: Player) -> bool {
        match player {
            Player::X => self.value > 0.0,
            Player::O => self.value < 0.0,
        }
    }

    /// Whether `player` should prefer `self` over `other`.
    ///
    /// Value decides first (max for X, min for O). On equal values a
    /// favorable result prefers fewer steps and an unfavorable one prefers
    /// more, so wins come as fast as possible and losses as late as possible.
    pub fn is_better_for(&self, other: &SearchResult, player: Player) -> bool {
        if self.value != other.value {
            return match player {
                Player::X => self.value > other.value,
                Player::O => self.value < other.value,
            };
        }

        if self.favors(player) {
            self.steps < other.steps
        } else {
            self.steps > other.steps
        }
    }
}

/// A candidate move and the result of searching below it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMove {
    pub mv: Move,
    pub result: SearchResult,
}

#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: &Board, turn: Player, depth: usize) -> SearchResult {
        self.nodes += 1;

        if let Some(leaf) = SearchResult::terminal(board.evaluate(), depth) {
            return leaf;
        }

        board
            .empty_positions()
            .into_iter()
            .map(|(row, col)| {
                let child = board.place(row, col, turn);
                self.minimax(&child, turn.opponent(), depth + 1)
            })
            .reduce(|best, child| {
                if child.is_better_for(&best, turn) {
                    child
                } else {
                    best
                }
            })
            // A board that is not terminal always has an empty cell.
            .unwrap_or(SearchResult {
                value: DRAW_VALUE,
                steps: depth,
            })
    }

    fn candidates(&mut self, board: &Board, player: Player) -> Vec<ScoredMove> {
        board
            .legal_moves(player)
            .into_iter()
            .map(|mv| {
                let child = board.place(mv.row, mv.col, player);
                let result = self.minimax(&child, player.opponent(), 1);
                ScoredMove { mv, result }
            })
            .collect()
    }
}

/// Score `board` with `turn` to move, counting plies from `depth`
pub fn minimax(board: &Board, turn: Player, depth: usize) -> SearchResult {
    Search::default().minimax(board, turn, depth)
}

/// Score every legal move for `player`, in row-major order.
///
/// Returns an empty list for a terminal board.
pub fn evaluate_moves(board: &Board, player: Player) -> Vec<ScoredMove> {
    let mut search = Search::default();
    let scored = search.candidates(board, player);
    debug!(
        nodes = search.nodes,
        candidates = scored.len(),
        "search complete"
    );
    scored
}

/// The candidate best for `player`; exact ties keep the earliest one
pub fn select_best(candidates: Vec<ScoredMove>, player: Player) -> Option<ScoredMove> {
    candidates.into_iter().reduce(|best, candidate| {
        if candidate.result.is_better_for(&best.result, player) {
            candidate
        } else {
            best
        }
    })
}

/// Pick the computer's move.
///
/// Among all candidates the one whose result is best for `computer` wins;
/// exact ties go to the first candidate in row-major order.
/// Returns `None` for a terminal board.
#[instrument(skip(board), fields(position = %board.encode()))]
pub fn best_action(board: &Board, computer: Player) -> Option<ScoredMove> {
    let empty = board.count(Cell::Empty);
    if empty > EXHAUSTIVE_CELL_LIMIT {
        warn!(
            empty,
            limit = EXHAUSTIVE_CELL_LIMIT,
            "exhaustive search on this many empty cells may not finish"
        );
    }

    let chosen = select_best(evaluate_moves(board, computer), computer);

    if let Some(choice) = &chosen {
        debug!(
            mv = %choice.mv,
            value = choice.result.value,
            steps = choice.result.steps,
            "chose move"
        );
    }

    chosen
}

/// The board after the computer plays its best move, or an unchanged copy
/// when no legal move remains
pub fn best_move(board: &Board, computer: Player) -> Board {
    match best_action(board, computer) {
        Some(choice) => board.place(choice.mv.row, choice.mv.col, computer),
        None => board.clone(),
    }
}
