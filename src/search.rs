//! Adversarial search for the computer's move
//!
//! Exhaustive minimax over every empty cell, scored by terminal outcome and
//! tie-broken on path length. There is no pruning and no caching, so this is
//! only practical on small boards.

pub mod minimax;

pub use minimax::{
    DRAW_VALUE, EXHAUSTIVE_CELL_LIMIT, O_WIN_VALUE, ScoredMove, SearchResult, X_WIN_VALUE, best_action, best_move,
    evaluate_moves, minimax, select_best,
};
