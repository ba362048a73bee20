//! Output formatting and spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::{DRAW_VALUE, SearchResult},
    tictactoe::{Board, Player},
};

/// Create a spinner for a running search
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:12} {}", format!("{}:", key), value);
}

/// Render a board with 1-based row and column labels
///
/// ```text
///    1 2 3
/// 1  X . .
/// 2  . O .
/// 3  . . .
/// ```
pub fn render_board(board: &Board) -> String {
    let label_width = board.height().to_string().len();
    let mut out = format!("{:label_width$}  ", "");
    out.push_str(
        &(1..=board.width())
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    );

    for (i, row) in board.rows().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>label_width$}  ", i + 1));
        out.push_str(
            &row.iter()
                .map(|c| c.to_char().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
    out
}

/// Describe a search result from `player`'s point of view
pub fn describe_result(result: &SearchResult, player: Player) -> String {
    let verdict = if result.value == DRAW_VALUE {
        "draw"
    } else if result.favors(player) {
        "win"
    } else {
        "loss"
    };
    format!("{verdict} in {} plies", result.steps)
}
