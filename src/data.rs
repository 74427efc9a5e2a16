use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// The two players in a game of chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

impl From<shakmaty::Color> for Player {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Player::White,
            shakmaty::Color::Black => Player::Black,
        }
    }
}

/// A (row, col) coordinate pair.
///
/// Row 0 is White's back rank and column 0 is the a-file. Coordinates are
/// not validated on construction: squares off the board are ordinary values
/// and must be filtered with [`crate::board::Board::square_in_bounds`] before
/// being used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Creates a square at the given row and column.
    #[inline]
    pub const fn at(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns the square displaced by `(d_row, d_col)`.
    ///
    /// The result may lie off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::at(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// True iff both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Iterates all 64 squares in row-major order, starting at a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }
}

impl From<shakmaty::Square> for Square {
    fn from(square: shakmaty::Square) -> Self {
        Self::at(square.rank() as i8, square.file() as i8)
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use chessington::data::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!(square, Square::at(3, 4));
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength(s.to_string()));
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile(file));
        }
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(SquareParseError::BadRank(rank))?;

        Ok(Square::at(rank as i8 - 1, (file as u8 - b'a') as i8))
    }
}

/// Display square in algebraic notation (e.g., "e4").
///
/// Squares off the board have no algebraic name and print as `(row,col)`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            write!(f, "{}{}", file, self.row + 1)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("square must be 2 characters (e.g., 'e4'), got '{0}'")]
    WrongLength(String),
    #[error("file must be a-h, got '{0}'")]
    BadFile(char),
    #[error("rank must be 1-8, got '{0}'")]
    BadRank(char),
}
