use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::Board;
use crate::data::{BOARD_SIZE, Square};
use crate::feedback::{BoardFeedback, SquareFeedback};

/// Terminal-based board display.
///
/// Renders the board as an 8×8 grid of piece letters with ANSI color-coded
/// backgrounds for the squares named in a [`BoardFeedback`].
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback)
    }
}

/// Render the board to any writer, White at the bottom.
pub(crate) fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    for row in (0..BOARD_SIZE).rev() {
        write!(w, " {} ", row + 1)?;
        for col in 0..BOARD_SIZE {
            let square = Square::at(row, col);
            let symbol = board
                .get_piece(square)
                .ok()
                .flatten()
                .map_or('·', |piece| piece.symbol());
            write!(w, "{}", format_square(symbol, feedback.get(square)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    writeln!(w, "{} to move", board.current_player())?;
    w.flush()?;
    Ok(())
}

/// Map a feedback variant to an ANSI-colored cell string.
fn format_square(symbol: char, feedback: Option<SquareFeedback>) -> String {
    match feedback {
        Some(SquareFeedback::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareFeedback::Capture) => format!("\x1b[41m {symbol} \x1b[0m"),
        Some(SquareFeedback::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}
