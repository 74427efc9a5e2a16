//! Piece kinds and their movement rules.
//!
//! Every rule is a pure function of the moving piece, the square it stands
//! on, and the board. Check, castling, en passant and promotion are not
//! modelled: a move is available whenever the target square is reachable
//! and not held by a friendly piece.

use crate::board::Board;
use crate::data::{Player, Square};

/// Available destination squares, in generation order.
pub type MoveList = Vec<Square>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Back-rank layout from the a-file to the h-file.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Upper-case letter used in algebraic notation (`P` for pawns).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl From<shakmaty::Role> for PieceKind {
    fn from(role: shakmaty::Role) -> Self {
        match role {
            shakmaty::Role::Pawn => PieceKind::Pawn,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::King => PieceKind::King,
        }
    }
}

/// A chess piece. It has no location of its own; the board is the only
/// record of where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
    /// Set once the piece has been moved by the board. Only pawns read it.
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self {
            kind,
            player,
            has_moved: false,
        }
    }

    /// Notation letter: upper case for White, lower case for Black.
    pub fn symbol(&self) -> char {
        match self.player {
            Player::White => self.kind.letter(),
            Player::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// True iff `other` belongs to the opposing side.
    #[inline]
    pub fn is_capturable(&self, other: &Piece) -> bool {
        self.player != other.player
    }

    /// True iff `square` is on the board and either empty or held by an
    /// opposing piece.
    pub fn is_free_or_capturable(&self, board: &Board, square: Square) -> bool {
        match board.get_piece(square) {
            Ok(None) => true,
            Ok(Some(occupant)) => self.is_capturable(occupant),
            Err(_) => false,
        }
    }

    /// Squares this piece may move to when standing on `from`.
    pub fn moves_from(&self, from: Square, board: &Board) -> MoveList {
        let moves = match self.kind {
            PieceKind::Pawn => self.pawn_moves(from, board),
            PieceKind::Knight => self.jumps(from, board, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.slides(from, board, &DIAGONALS),
            PieceKind::Rook => self.slides(from, board, &ORTHOGONALS),
            PieceKind::Queen => {
                let mut moves = self.slides(from, board, &DIAGONALS);
                moves.extend(self.slides(from, board, &ORTHOGONALS));
                moves
            }
            PieceKind::King => self.jumps(from, board, &KING_OFFSETS),
        };
        log::trace!(
            "{:?} {:?} on {}: {} moves",
            self.player,
            self.kind,
            from,
            moves.len()
        );
        moves
    }

    /// Casts a ray from `from` along `(d_row, d_col)`.
    ///
    /// Yields empty squares until the ray leaves the board or meets a piece.
    /// An opposing piece is yielded and ends the ray; a friendly one ends it
    /// without being yielded.
    pub fn ray<'a>(
        &'a self,
        from: Square,
        board: &'a Board,
        (d_row, d_col): (i8, i8),
    ) -> impl Iterator<Item = Square> + 'a {
        let mut next = Some(from.offset(d_row, d_col));
        std::iter::from_fn(move || {
            let square = next.take()?;
            if !self.is_free_or_capturable(board, square) {
                return None;
            }
            if board.square_is_empty(square) {
                next = Some(square.offset(d_row, d_col));
            }
            Some(square)
        })
    }

    fn slides(&self, from: Square, board: &Board, directions: &[(i8, i8)]) -> MoveList {
        directions
            .iter()
            .flat_map(|&direction| self.ray(from, board, direction))
            .collect()
    }

    fn jumps(&self, from: Square, board: &Board, offsets: &[(i8, i8)]) -> MoveList {
        offsets
            .iter()
            .map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&square| self.is_free_or_capturable(board, square))
            .collect()
    }

    /// Forward steps first, then diagonal captures.
    ///
    /// Captures do not depend on the square ahead being free.
    fn pawn_moves(&self, from: Square, board: &Board) -> MoveList {
        let (direction, home_row) = match self.player {
            Player::White => (1, 1),
            Player::Black => (-1, 6),
        };
        let mut moves = MoveList::new();

        let single = from.offset(direction, 0);
        if board.square_is_empty(single) {
            moves.push(single);

            let double = from.offset(2 * direction, 0);
            if !self.has_moved && from.row == home_row && board.square_is_empty(double) {
                moves.push(double);
            }
        }

        for d_col in [-1, 1] {
            let target = from.offset(direction, d_col);
            if let Ok(Some(occupant)) = board.get_piece(target)
                && self.is_capturable(occupant)
            {
                moves.push(target);
            }
        }

        moves
    }
}
