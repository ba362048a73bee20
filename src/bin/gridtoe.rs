//! gridtoe CLI - Tic-tac-toe on any rectangular board
//!
//! This CLI provides:
//! - An interactive game against the minimax computer or another human
//! - Board evaluation (won, drawn, in progress)
//! - Best-move analysis for arbitrary positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridtoe")]
#[command(version, about = "Generalized tic-tac-toe with a perfect-play computer", long_about = None)]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(gridtoe::cli::commands::play::PlayArgs),

    /// Report the status of a board
    Evaluate(gridtoe::cli::commands::evaluate::EvaluateArgs),

    /// Compute the computer's move for a board
    BestMove(gridtoe::cli::commands::best_move::BestMoveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gridtoe::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => gridtoe::cli::commands::play::execute(args),
        Commands::Evaluate(args) => gridtoe::cli::commands::evaluate::execute(args),
        Commands::BestMove(args) => gridtoe::cli::commands::best_move::execute(args),
    }
}
