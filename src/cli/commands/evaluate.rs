//! Evaluate command - Report the status of a board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    tictactoe::{LineAnalyzer, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Report whether a board is won, drawn, or still in progress")]
pub struct EvaluateArgs {
    /// Board rows separated by '/', e.g. "XO./.X./..O"
    pub board: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EvaluationReport {
    board: String,
    height: usize,
    width: usize,
    outcome: Outcome,
    winning_line: Option<String>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let outcome = board.evaluate();
    let winning_line = LineAnalyzer::winning_line(&board).map(|(line, _)| line.to_string());

    if args.json {
        let report = EvaluationReport {
            board: board.encode(),
            height: board.height(),
            width: board.width(),
            outcome,
            winning_line,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Board");
    println!("{}", render_board(&board));
    println!();
    print_kv("Outcome", &outcome.to_string());
    if let Some(line) = winning_line {
        print_kv("Line", &line);
    }
    print_kv("Empty cells", &board.empty_positions().len().to_string());

    Ok(())
}
