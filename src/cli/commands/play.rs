//! Play command - Interactive game in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing::info;

use super::parse_player_token;
use crate::{
    Game,
    adapters::TracingObserver,
    app::GameConfig,
    cli::output::{create_spinner, render_board},
    search::EXHAUSTIVE_CELL_LIMIT,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the computer or another human")]
pub struct PlayArgs {
    /// Number of columns
    #[arg(long, short = 'w')]
    pub width: Option<usize>,

    /// Number of rows (defaults to the width)
    #[arg(long)]
    pub height: Option<usize>,

    /// Mark the computer plays: `x`, `o`, or `none` for two humans
    #[arg(long, short = 'c')]
    pub computer: Option<String>,

    /// Player who moves first (`x` or `o`)
    #[arg(long)]
    pub first: Option<String>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Zero-based cell
    Place(usize, usize),
    Undo,
    Reset,
    Hint,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  ROW COL   place your mark (1-based, e.g. '2 3' or '2,3')
  hint      show the computer's suggestion for your move
  undo      take back the last move
  reset     start over
  help      show this message
  quit      leave the game";

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    info!(?config, "starting interactive game");

    let mut game = Game::new(config)?;
    game.add_observer(Box::new(TracingObserver))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut game, stdin.lock(), stdout.lock())
}

fn build_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
        // A new width without a height means a square board.
        config.height = args.height;
    }
    if let Some(height) = args.height {
        config.height = Some(height);
    }
    if let Some(token) = args.computer.as_deref() {
        config.computer = match token.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => None,
            other => Some(parse_player_token(other, "--computer")?),
        };
    }
    if let Some(token) = args.first.as_deref() {
        config.first_player = parse_player_token(token, "--first")?;
    }

    config.validate()?;

    let cells = config.width * config.board_height();
    if config.computer.is_some() && cells > EXHAUSTIVE_CELL_LIMIT {
        bail!(
            "A {}x{} board is too large for the computer (at most {EXHAUSTIVE_CELL_LIMIT} cells); \
             pass --computer none for a two-player game",
            config.board_height(),
            config.width
        );
    }
    Ok(config)
}

fn parse_input(line: &str) -> Result<Command> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "undo" | "u" => return Ok(Command::Undo),
        "reset" | "new" => return Ok(Command::Reset),
        "hint" => return Ok(Command::Hint),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        bail!("Expected 'ROW COL', got '{line}' (type 'help' for commands)");
    };

    let parse = |s: &str, what: &str| -> Result<usize> {
        match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(anyhow!("Invalid {what} '{s}' (numbering starts at 1)")),
        }
    };
    Ok(Command::Place(parse(*row, "row")?, parse(*col, "column")?))
}

/// Drive a game from `input`, writing the board and messages to `out`.
///
/// Returns when the player quits or the input ends.
fn run<R: BufRead, W: Write>(game: &mut Game, mut input: R, mut out: W) -> Result<()> {
    if let Some(name) = game.opponent_name() {
        let computer = game
            .config()
            .computer
            .map(|p| p.to_string())
            .unwrap_or_default();
        writeln!(out, "{name} plays {computer}. Type 'help' for commands.")?;
    } else {
        writeln!(out, "Two players. Type 'help' for commands.")?;
    }

    let mut line = String::new();
    loop {
        if game.is_computer_turn() {
            let spinner = create_spinner("Computer is thinking...");
            let played = game.computer_move();
            spinner.finish_and_clear();
            if let Some(mv) = played? {
                writeln!(out, "\nComputer plays {} {}", mv.row + 1, mv.col + 1)?;
            }
        }

        let outcome = game.outcome();
        writeln!(out, "\n{}", render_board(game.board()))?;
        writeln!(out, "{}", outcome.status_line(game.turn()))?;
        if outcome.is_terminal() {
            writeln!(out, "Type 'reset' to play again, 'undo' to go back, or 'quit'.")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_input(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Place(row, col) => {
                if let Err(e) = game.play(row, col) {
                    writeln!(out, "{e}")?;
                }
            }
            Command::Undo => match game.undo() {
                Ok(undone) => writeln!(out, "Took back {} move(s)", undone.len())?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Reset => game.reset(),
            Command::Hint => match game.suggest(game.turn()) {
                Some(mv) => writeln!(out, "Try {} {}", mv.row + 1, mv.col + 1)?,
                None => writeln!(out, "No moves left")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(()),
        }
    }
}
