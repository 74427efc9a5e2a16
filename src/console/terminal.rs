use std::io::{self, BufRead, Write};

use super::TerminalDisplay;
use crate::BoardDisplay;
use crate::board::Board;
use crate::data::Square;
use crate::feedback::compute_feedback;
use crate::viewer::{ClickOutcome, Viewer};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// A parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Click(Square),
    Load(String),
    Reset,
    Redraw,
    Quit,
}

fn parse_command(input: &str) -> Result<Option<Command>, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };

    let command = match head {
        "c" => {
            let arg = parts.next().ok_or("Usage: c <square>")?;
            let square = arg
                .parse::<Square>()
                .map_err(|e| format!("Invalid square: {e}"))?;
            Command::Click(square)
        }
        "load" => {
            // FEN fields are space separated, so take the rest of the line
            let fen = parts.collect::<Vec<_>>().join(" ");
            match fen.as_str() {
                "" => return Err("Usage: load <fen> | load startpos".to_string()),
                "startpos" => Command::Load(STARTPOS.to_string()),
                _ => Command::Load(fen),
            }
        }
        "r" => Command::Reset,
        "p" => Command::Redraw,
        "q" => Command::Quit,
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(Some(command))
}

/// Runs an interactive terminal interface for playing on the board.
///
/// Each click either selects a piece of the side to move, completes a move
/// to a highlighted square, or clears the selection.
pub fn run_interactive_terminal(board: Board) {
    let mut viewer = Viewer::from_board(board);
    let mut display = TerminalDisplay::new();

    redraw(&mut display, &viewer);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            log::error!("Failed to flush stdout: {e}");
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {e}");
                break;
            }
        }

        let command = match parse_command(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                log::warn!("rejected input {:?}", input.trim());
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Click(square) => match viewer.click(square) {
                Ok(outcome) => {
                    redraw(&mut display, &viewer);
                    if let ClickOutcome::Moved { from, to } = outcome {
                        println!("\n{from} → {to}");
                    }
                }
                Err(e) => println!("❌ {e}"),
            },
            Command::Load(fen) => match Board::from_fen(&fen) {
                Ok(board) => {
                    viewer = Viewer::from_board(board);
                    redraw(&mut display, &viewer);
                    println!("\n✅ Position loaded from FEN");
                }
                Err(e) => println!("❌ {e}"),
            },
            Command::Reset => {
                viewer = Viewer::new();
                redraw(&mut display, &viewer);
                println!("\n🔄 Reset to initial state");
            }
            Command::Redraw => redraw(&mut display, &viewer),
            Command::Quit => break,
        }
    }
}

/// Draws the complete interface: help text and the board with highlights.
fn redraw(display: &mut TerminalDisplay, viewer: &Viewer) {
    clear_screen();
    println!("♟️  Chessington");
    println!();
    println!("Commands: c <square> | load <fen> | r (reset) | p (refresh) | q (quit)");
    println!();

    if let Err(e) = display.show(viewer.board(), &compute_feedback(viewer)) {
        log::error!("{e}");
    }
}
