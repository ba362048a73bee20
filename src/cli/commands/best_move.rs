//! Best-move command - Run the search on a board

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use super::{parse_board, parse_player_token};
use crate::{
    cli::output::{create_spinner, describe_result, print_kv, print_section, render_board},
    search::{self, ScoredMove},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Compute the computer's move for a board")]
pub struct BestMoveArgs {
    /// Board rows separated by '/', e.g. "XX./.O./..."
    pub board: String,

    /// Mark the computer plays (`x` or `o`); inferred from the piece counts when omitted
    #[arg(long, short = 'c')]
    pub computer: Option<String>,

    /// List every candidate move with its value
    #[arg(long)]
    pub all: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BestMoveReport {
    computer: Player,
    chosen: Option<ScoredMove>,
    result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<Vec<ScoredMove>>,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let computer = match args.computer.as_deref() {
        Some(token) => parse_player_token(token, "--computer")?,
        None => board.infer_turn(Player::X).ok_or_else(|| {
            anyhow!(
                "Cannot infer whose turn it is from '{}'; pass --computer",
                args.board
            )
        })?,
    };

    let spinner = create_spinner("Searching...");
    let candidates = search::evaluate_moves(&board, computer);
    spinner.finish_and_clear();

    let chosen = search::select_best(candidates.clone(), computer);
    let next = match &chosen {
        Some(choice) => board.play(choice.mv)?,
        None => board.clone(),
    };

    if args.json {
        let report = BestMoveReport {
            computer,
            chosen,
            result: next.encode(),
            candidates: args.all.then_some(candidates),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!("Best move for {computer}"));
    println!("{}", render_board(&board));
    println!();

    match chosen {
        Some(choice) => {
            print_kv(
                "Move",
                &format!("row {}, col {}", choice.mv.row + 1, choice.mv.col + 1),
            );
            print_kv("Expect", &describe_result(&choice.result, computer));
            println!();
            println!("{}", render_board(&next));
        }
        None => println!("  (no legal moves: {})", board.evaluate()),
    }

    if args.all && !candidates.is_empty() {
        println!("\nAll candidates:");
        for candidate in &candidates {
            println!(
                "  - row {}, col {}: value {:+.1}, {}",
                candidate.mv.row + 1,
                candidate.mv.col + 1,
                candidate.result.value,
                describe_result(&candidate.result, computer)
            );
        }
    }

    Ok(())
}
