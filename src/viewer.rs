//! Click-driven selection state machine sitting between the player and the board.

use crate::board::{Board, BoardError};
use crate::data::Square;
use crate::feedback::FeedbackSource;
use crate::pieces::MoveList;

/// What a click did to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected.
    Selected { origin: Square, targets: MoveList },
    /// The selected piece moved and the turn passed.
    Moved { from: Square, to: Square },
    /// The selection was dropped.
    Cleared,
}

/// Click-driven board viewer.
///
/// Clicking a piece of the side to move selects it and records where it may
/// go. Clicking one of those squares next makes the move. Any other click
/// drops the selection.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    board: Board,
    pending_origin: Option<Square>,
    pending_targets: MoveList,
}

impl FeedbackSource for Viewer {
    fn board(&self) -> &Board {
        &self.board
    }

    fn selected(&self) -> Option<Square> {
        self.pending_origin
    }

    fn targets(&self) -> &[Square] {
        &self.pending_targets
    }
}

impl Viewer {
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::at_starting_position())
    }

    /// Creates a viewer over an existing board, with nothing selected.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            pending_origin: None,
            pending_targets: MoveList::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Process a click on `square`.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome, BoardError> {
        if let Some(from) = self.pending_origin
            && self.pending_targets.contains(&square)
        {
            self.clear_selection();
            if self.board.move_piece(from, square)? {
                return Ok(ClickOutcome::Moved { from, to: square });
            }
            return Ok(ClickOutcome::Cleared);
        }

        if !self.board.square_in_bounds(square) {
            self.clear_selection();
            return Ok(ClickOutcome::Cleared);
        }

        let selectable = matches!(
            self.board.get_piece(square)?,
            Some(piece) if piece.player == self.board.current_player()
        );
        if !selectable {
            self.clear_selection();
            return Ok(ClickOutcome::Cleared);
        }

        let targets = self.board.moves_from(square)?;
        log::debug!("selected {square}: {targets:?}");
        self.pending_origin = Some(square);
        self.pending_targets = targets.clone();
        Ok(ClickOutcome::Selected {
            origin: square,
            targets,
        })
    }

    fn clear_selection(&mut self) {
        self.pending_origin = None;
        self.pending_targets.clear();
    }
}
