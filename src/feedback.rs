use crate::board::Board;
use crate::data::Square;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece stands here
    Origin,
    /// The selected piece may move to this empty square
    Destination,
    /// Moving here captures an opponent piece
    Capture,
}

/// Contains the set of squares and their associated feedback types for the current selection.
///
/// `BoardFeedback` is computed by `compute_feedback()` and consumed by the terminal renderer
/// to highlight the selected piece and where it may go. It is the primary interface between
/// the viewer state and whatever draws the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any existing entry
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    /// Returns true if there are no feedback squares to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Square, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Square, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Selection state needed to compute feedback
///
/// This trait defines what the feedback system needs from the viewer.
pub trait FeedbackSource {
    /// The board being shown
    fn board(&self) -> &Board;

    /// Square of the currently selected piece
    fn selected(&self) -> Option<Square>;

    /// Squares the selected piece may move to
    fn targets(&self) -> &[Square];
}

/// Compute visual feedback for the current selection.
///
/// - Nothing selected: no feedback
/// - Piece selected: its square plus every available destination,
///   with occupied destinations marked as captures
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    let Some(origin) = source.selected() else {
        return BoardFeedback::default();
    };

    std::iter::once((origin, SquareFeedback::Origin))
        .chain(
            source
                .targets()
                .iter()
                .map(|&target| classify_target(source.board(), target)),
        )
        .collect::<Vec<_>>()
        .into()
}

/// Classify a destination as either a capture or a plain move
fn classify_target(board: &Board, target: Square) -> (Square, SquareFeedback) {
    if board.square_is_occupied(target) {
        (target, SquareFeedback::Capture)
    } else {
        (target, SquareFeedback::Destination)
    }
}
