//! A representation of the chess board and the pieces on it.
//!
//! The board is "dumb" about chess beyond whose turn it is: any piece of the
//! side to move can be relocated to any square. Callers consult
//! [`Board::available_moves`] to decide which relocations make sense.

use std::fmt;

use shakmaty::fen::{Fen, ParseFenError};
use thiserror::Error;

use crate::data::{BOARD_SIZE, Player, Square};
use crate::pieces::{MoveList, Piece, PieceKind};

const SIZE: usize = BOARD_SIZE as usize;

/// Stable handle to a piece owned by a [`Board`].
///
/// Handles compare equal iff they denote the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("square {0} is outside the board")]
    OutOfBounds(Square),
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),
    #[error("board cannot hold more than {} pieces", usize::from(u16::MAX) + 1)]
    PieceLimit,
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] ParseFenError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Every piece ever placed. Captured pieces stay here but are no longer
    /// referenced from `grid`.
    pieces: Vec<Piece>,
    grid: [[Option<PieceId>; SIZE]; SIZE],
    current_player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::at_starting_position()
    }
}

impl Board {
    /// A board with no pieces and White to move.
    pub fn empty() -> Self {
        Self {
            pieces: Vec::new(),
            grid: [[None; SIZE]; SIZE],
            current_player: Player::White,
        }
    }

    /// The standard starting position with White to move.
    pub fn at_starting_position() -> Self {
        let mut board = Self::empty();
        let mut next = 0;
        for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
            let ranks = [
                (0, Piece::new(kind, Player::White)),
                (1, Piece::new(PieceKind::Pawn, Player::White)),
                (6, Piece::new(PieceKind::Pawn, Player::Black)),
                (7, Piece::new(kind, Player::Black)),
            ];
            for (row, piece) in ranks {
                board.pieces.push(piece);
                board.grid[row][col] = Some(PieceId(next));
                next += 1;
            }
        }
        board
    }

    /// Loads piece placement and side to move from FEN.
    ///
    /// Castling rights, en passant square and move clocks are parsed but
    /// have no counterpart on this board and are dropped.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let fen: Fen = fen.trim().parse()?;
        let setup = fen.as_setup();

        let mut board = Self::empty();
        for idx in 0..64 {
            let square = shakmaty::Square::new(idx);
            if let Some(piece) = setup.board.piece_at(square) {
                board.place(
                    Square::from(square),
                    Piece::new(piece.role.into(), piece.color.into()),
                )?;
            }
        }
        board.current_player = setup.turn.into();
        log::debug!(
            "loaded {} pieces from FEN, {} to move",
            board.pieces.len(),
            board.current_player
        );
        Ok(board)
    }

    /// The side whose move is next.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// True iff both coordinates of `square` lie in `0..8`.
    #[inline]
    pub fn square_in_bounds(&self, square: Square) -> bool {
        square.is_on_board()
    }

    /// True iff `square` is on the board and holds a piece.
    #[inline]
    pub fn square_is_occupied(&self, square: Square) -> bool {
        matches!(self.piece_id_at(square), Ok(Some(_)))
    }

    /// True iff `square` is on the board and holds nothing.
    #[inline]
    pub fn square_is_empty(&self, square: Square) -> bool {
        matches!(self.piece_id_at(square), Ok(None))
    }

    /// Handle of the piece on `square`, if any.
    pub fn piece_id_at(&self, square: Square) -> Result<Option<PieceId>, BoardError> {
        let (row, col) = self.index(square)?;
        Ok(self.grid[row][col])
    }

    /// The piece on `square`, if any.
    pub fn get_piece(&self, square: Square) -> Result<Option<&Piece>, BoardError> {
        Ok(self.piece_id_at(square)?.map(|id| self.stored(id)))
    }

    /// The piece behind a handle, whether or not it is still on the board.
    ///
    /// `None` for a handle this board never issued.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(usize::from(id.0))
    }

    /// Overwrites the occupant of `square`.
    ///
    /// No check is made that `occupant` is not already standing elsewhere;
    /// callers moving a piece must clear its old square themselves.
    pub fn set_piece(
        &mut self,
        square: Square,
        occupant: Option<PieceId>,
    ) -> Result<(), BoardError> {
        let (row, col) = self.index(square)?;
        self.grid[row][col] = occupant;
        Ok(())
    }

    /// Takes ownership of `piece` and places it on `square`, replacing any
    /// previous occupant.
    pub fn put_piece(&mut self, square: Square, piece: Piece) -> Result<PieceId, BoardError> {
        self.index(square)?;
        self.place(square, piece)
    }

    /// Searches the board in row-major order for the given piece.
    pub fn find_piece(&self, id: PieceId) -> Result<Square, BoardError> {
        Square::all()
            .find(|&square| matches!(self.piece_id_at(square), Ok(Some(found)) if found == id))
            .ok_or(BoardError::PieceNotFound(id))
    }

    /// Moves the piece on `from` to `to`, capturing whatever stood there.
    ///
    /// Only a piece belonging to the current player moves. Anything else
    /// leaves the board untouched and returns `Ok(false)`. A successful move
    /// marks the piece as moved and passes the turn.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<bool, BoardError> {
        self.index(to)?;
        let Some(id) = self.piece_id_at(from)? else {
            log::debug!("ignoring move {from}->{to}: no piece on {from}");
            return Ok(false);
        };
        let mover = self.stored(id).player;
        if mover != self.current_player {
            log::debug!(
                "ignoring move {from}->{to}: {mover} piece but {} to move",
                self.current_player
            );
            return Ok(false);
        }

        if let Some(captured) = self.piece_id_at(to)? {
            log::debug!("{:?} on {to} captured", self.stored(captured).kind);
        }
        self.set_piece(to, Some(id))?;
        self.set_piece(from, None)?;
        self.pieces[usize::from(id.0)].has_moved = true;
        self.current_player = self.current_player.opponent();
        log::debug!("{mover} moved {from}->{to}");
        Ok(true)
    }

    /// Moves the given piece to `to`. See [`Board::move_piece`].
    ///
    /// The piece is marked as moved whether or not the board accepted the move.
    pub fn move_to(&mut self, id: PieceId, to: Square) -> Result<bool, BoardError> {
        let from = self.find_piece(id)?;
        let moved = self.move_piece(from, to)?;
        self.pieces[usize::from(id.0)].has_moved = true;
        Ok(moved)
    }

    /// Squares the given piece may move to from where it currently stands.
    pub fn available_moves(&self, id: PieceId) -> Result<MoveList, BoardError> {
        let from = self.find_piece(id)?;
        Ok(self.stored(id).moves_from(from, self))
    }

    /// Squares the piece on `from` may move to; empty if `from` is empty.
    pub fn moves_from(&self, from: Square) -> Result<MoveList, BoardError> {
        Ok(self
            .get_piece(from)?
            .map(|piece| piece.moves_from(from, self))
            .unwrap_or_default())
    }

    /// Pieces currently on the board with their squares, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(|square| match self.get_piece(square) {
            Ok(Some(piece)) => Some((square, piece)),
            _ => None,
        })
    }

    fn index(&self, square: Square) -> Result<(usize, usize), BoardError> {
        if self.square_in_bounds(square) {
            Ok((square.row as usize, square.col as usize))
        } else {
            Err(BoardError::OutOfBounds(square))
        }
    }

    /// Piece behind a handle taken from this board's grid.
    fn stored(&self, id: PieceId) -> &Piece {
        &self.pieces[usize::from(id.0)]
    }

    /// Stores and places a piece on a square already known to be in bounds.
    fn place(&mut self, square: Square, piece: Piece) -> Result<PieceId, BoardError> {
        let id = u16::try_from(self.pieces.len())
            .map(PieceId)
            .map_err(|_| BoardError::PieceLimit)?;
        self.pieces.push(piece);
        self.grid[square.row as usize][square.col as usize] = Some(id);
        Ok(id)
    }
}
