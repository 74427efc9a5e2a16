//! Move generation for a simplified game of chess, plus a small
//! click-driven board viewer.

pub mod board;
pub mod console;
pub mod data;
pub mod feedback;
pub mod pieces;
pub mod viewer;

/// Trait for showing the board and its highlights to the player.
///
/// Implemented by the terminal renderer; tests and alternative frontends
/// can provide their own.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given feedback.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to their own output (terminal colors, GUI highlights, etc.).
    fn show(&mut self, board: &board::Board, feedback: &feedback::BoardFeedback)
    -> Result<(), Self::Error>;
}
