use std::collections::HashSet;

use chessington::board::Board;
use chessington::data::{Player, Square};
use chessington::pieces::{Piece, PieceKind};
use shakmaty::{Bitboard, File, Rank, attacks};
use test_case::test_case;

/// Helper: place a piece, returning nothing; panics on an off-board square.
fn place(board: &mut Board, square: Square, kind: PieceKind, player: Player) {
    board
        .put_piece(square, Piece::new(kind, player))
        .expect("test square should be on the board");
}

fn moves_at(board: &Board, square: Square) -> HashSet<Square> {
    board
        .moves_from(square)
        .expect("square should be on the board")
        .into_iter()
        .collect()
}

fn squares(coords: &[(i8, i8)]) -> HashSet<Square> {
    coords.iter().map(|&(r, c)| Square::at(r, c)).collect()
}

fn neighbours(square: Square) -> Vec<Square> {
    (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&d| d != (0, 0))
        .map(|(dr, dc)| square.offset(dr, dc))
        .collect()
}

// ---------------------------------------------------------------
// King
// ---------------------------------------------------------------

#[test_case(Player::White)]
#[test_case(Player::Black)]
fn king_in_open_has_eight_moves(player: Player) {
    let mut board = Board::empty();
    let square = Square::at(4, 4);
    place(&mut board, square, PieceKind::King, player);

    let moves = moves_at(&board, square);

    assert_eq!(moves.len(), 8);
    assert_eq!(moves, neighbours(square).into_iter().collect());
}

#[test_case(Square::at(7, 4), &[(8, 3), (8, 4), (8, 5)]; "top")]
#[test_case(Square::at(0, 4), &[(-1, 3), (-1, 4), (-1, 5)]; "bottom")]
#[test_case(Square::at(4, 0), &[(3, -1), (4, -1), (5, -1)]; "left")]
#[test_case(Square::at(4, 7), &[(3, 8), (4, 8), (5, 8)]; "right")]
fn king_cannot_move_off_board(square: Square, off_board: &[(i8, i8)]) {
    let mut board = Board::empty();
    place(&mut board, square, PieceKind::King, Player::Black);

    let moves = moves_at(&board, square);

    assert_eq!(moves.len(), 5);
    for target in squares(off_board) {
        assert!(!moves.contains(&target), "{target} should be excluded");
    }
    for target in neighbours(square).into_iter().filter(|s| s.is_on_board()) {
        assert!(moves.contains(&target), "{target} should be included");
    }
}

#[test]
fn king_cannot_move_into_friendly_pieces() {
    let mut board = Board::empty();
    let square = Square::at(4, 4);
    place(&mut board, square, PieceKind::King, Player::White);
    for neighbour in neighbours(square) {
        place(&mut board, neighbour, PieceKind::Pawn, Player::White);
    }

    assert!(moves_at(&board, square).is_empty());
}

#[test]
fn king_can_take_enemy_pieces() {
    let mut board = Board::empty();
    let square = Square::at(4, 4);
    place(&mut board, square, PieceKind::King, Player::White);
    for neighbour in neighbours(square) {
        place(&mut board, neighbour, PieceKind::Pawn, Player::Black);
    }

    assert_eq!(
        moves_at(&board, square),
        neighbours(square).into_iter().collect()
    );
}

// ---------------------------------------------------------------
// Knight
// ---------------------------------------------------------------

#[test]
fn knight_in_centre_has_eight_targets() {
    let mut board = Board::empty();
    place(&mut board, Square::at(4, 4), PieceKind::Knight, Player::White);

    assert_eq!(
        moves_at(&board, Square::at(4, 4)),
        squares(&[
            (6, 5),
            (6, 3),
            (2, 5),
            (2, 3),
            (5, 6),
            (5, 2),
            (3, 6),
            (3, 2)
        ])
    );
}

#[test]
fn knight_in_corner_has_two_targets() {
    let mut board = Board::empty();
    place(&mut board, Square::at(0, 0), PieceKind::Knight, Player::Black);

    assert_eq!(
        moves_at(&board, Square::at(0, 0)),
        squares(&[(2, 1), (1, 2)])
    );
}

#[test]
fn knight_jumps_over_pieces_but_not_onto_friends() {
    let mut board = Board::empty();
    place(&mut board, Square::at(0, 0), PieceKind::Knight, Player::White);
    place(&mut board, Square::at(1, 0), PieceKind::Pawn, Player::White);
    place(&mut board, Square::at(0, 1), PieceKind::Pawn, Player::White);
    place(&mut board, Square::at(2, 1), PieceKind::Pawn, Player::White);
    place(&mut board, Square::at(1, 2), PieceKind::Pawn, Player::Black);

    assert_eq!(moves_at(&board, Square::at(0, 0)), squares(&[(1, 2)]));
}

// ---------------------------------------------------------------
// Sliders
// ---------------------------------------------------------------

#[test]
fn bishop_on_empty_board_covers_both_diagonals() {
    let mut board = Board::empty();
    place(&mut board, Square::at(3, 3), PieceKind::Bishop, Player::White);

    let expected: HashSet<Square> = Square::all()
        .filter(|s| *s != Square::at(3, 3))
        .filter(|s| (s.row - 3).abs() == (s.col - 3).abs())
        .collect();

    assert_eq!(expected.len(), 13);
    assert_eq!(moves_at(&board, Square::at(3, 3)), expected);
}

#[test]
fn bishop_stops_at_friends_and_captures_enemies() {
    let mut board = Board::empty();
    place(&mut board, Square::at(3, 3), PieceKind::Bishop, Player::White);
    place(&mut board, Square::at(5, 5), PieceKind::Pawn, Player::White);
    place(&mut board, Square::at(1, 1), PieceKind::Pawn, Player::Black);

    let moves = moves_at(&board, Square::at(3, 3));

    assert!(moves.contains(&Square::at(4, 4)));
    assert!(!moves.contains(&Square::at(5, 5)));
    assert!(!moves.contains(&Square::at(6, 6)));
    assert!(moves.contains(&Square::at(2, 2)));
    assert!(moves.contains(&Square::at(1, 1)));
    assert!(!moves.contains(&Square::at(0, 0)));
    assert_eq!(moves.len(), 9);
}

#[test]
fn rook_stops_at_enemy() {
    let mut board = Board::empty();
    place(&mut board, Square::at(0, 0), PieceKind::Rook, Player::Black);
    place(&mut board, Square::at(0, 2), PieceKind::Knight, Player::White);
    place(&mut board, Square::at(2, 0), PieceKind::Knight, Player::Black);

    assert_eq!(
        moves_at(&board, Square::at(0, 0)),
        squares(&[(0, 1), (0, 2), (1, 0)])
    );
}

#[test]
fn queen_combines_rook_and_bishop() {
    let mut board = Board::empty();
    place(&mut board, Square::at(2, 5), PieceKind::Queen, Player::White);
    place(&mut board, Square::at(4, 3), PieceKind::Pawn, Player::Black);
    place(&mut board, Square::at(2, 1), PieceKind::Pawn, Player::White);

    let mut rook_board = board.clone();
    rook_board
        .put_piece(Square::at(2, 5), Piece::new(PieceKind::Rook, Player::White))
        .unwrap();
    let mut bishop_board = board.clone();
    bishop_board
        .put_piece(Square::at(2, 5), Piece::new(PieceKind::Bishop, Player::White))
        .unwrap();

    let union: HashSet<Square> = moves_at(&rook_board, Square::at(2, 5))
        .union(&moves_at(&bishop_board, Square::at(2, 5)))
        .copied()
        .collect();

    assert_eq!(moves_at(&board, Square::at(2, 5)), union);
}

// ---------------------------------------------------------------
// Pawn
// ---------------------------------------------------------------

#[test_case(0)]
#[test_case(3)]
#[test_case(7)]
fn unmoved_white_pawn_on_empty_board(col: i8) {
    let mut board = Board::empty();
    place(&mut board, Square::at(1, col), PieceKind::Pawn, Player::White);

    assert_eq!(
        moves_at(&board, Square::at(1, col)),
        squares(&[(2, col), (3, col)])
    );
}

#[test]
fn pawn_loses_double_step_after_moving() {
    let mut board = Board::empty();
    let pawn = board
        .put_piece(Square::at(1, 2), Piece::new(PieceKind::Pawn, Player::White))
        .unwrap();
    place(&mut board, Square::at(7, 7), PieceKind::King, Player::Black);

    assert!(board.move_to(pawn, Square::at(2, 2)).unwrap());
    assert!(
        board
            .move_piece(Square::at(7, 7), Square::at(7, 6))
            .unwrap()
    );

    assert_eq!(board.available_moves(pawn).unwrap(), vec![Square::at(3, 2)]);
}

#[test]
fn pawn_captures_regardless_of_blocked_square_ahead() {
    let mut board = Board::empty();
    place(&mut board, Square::at(4, 4), PieceKind::Pawn, Player::Black);
    place(&mut board, Square::at(3, 4), PieceKind::Pawn, Player::White);
    place(&mut board, Square::at(3, 3), PieceKind::Knight, Player::White);
    place(&mut board, Square::at(3, 5), PieceKind::Rook, Player::White);

    assert_eq!(
        moves_at(&board, Square::at(4, 4)),
        squares(&[(3, 3), (3, 5)])
    );
}

#[test]
fn pawn_on_edge_file_has_one_capture_diagonal() {
    let mut board = Board::empty();
    place(&mut board, Square::at(6, 0), PieceKind::Pawn, Player::Black);
    place(&mut board, Square::at(5, 1), PieceKind::Queen, Player::White);

    assert_eq!(
        moves_at(&board, Square::at(6, 0)),
        squares(&[(5, 0), (4, 0), (5, 1)])
    );
}

// ---------------------------------------------------------------
// Board contract
// ---------------------------------------------------------------

#[test]
fn moving_piece_keeps_identity() {
    let mut board = Board::at_starting_position();
    let from = Square::at(1, 0);
    let to = Square::at(3, 0);
    let piece = board.piece_id_at(from).unwrap().expect("pawn on a2");

    assert!(board.move_piece(from, to).unwrap());

    assert!(board.get_piece(from).unwrap().is_none());
    assert_eq!(board.piece_id_at(to).unwrap(), Some(piece));
    assert_eq!(board.find_piece(piece).unwrap(), to);
}

#[test]
fn rejected_moves_do_not_change_the_board() {
    let mut board = Board::at_starting_position();
    let before = board.clone();

    assert!(!board.move_piece(Square::at(4, 4), Square::at(5, 4)).unwrap());
    assert!(!board.move_piece(Square::at(7, 1), Square::at(5, 2)).unwrap());

    assert_eq!(board, before);
    assert_eq!(board.current_player(), Player::White);
}

// ---------------------------------------------------------------
// Cross-check against shakmaty's attack tables
// ---------------------------------------------------------------

fn to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(
        File::new(square.col as u32),
        Rank::new(square.row as u32),
    )
}

#[test_case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"; "start")]
#[test_case("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1"; "italian")]
#[test_case("8/2k5/3q4/8/1B2R3/8/5N2/K6n b - - 0 1"; "sparse")]
#[test_case("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"; "kiwipete")]
fn non_pawn_moves_match_attack_tables(fen: &str) {
    let board = Board::from_fen(fen).expect("valid FEN");

    let mut occupied = Bitboard::EMPTY;
    let mut white = Bitboard::EMPTY;
    for (square, piece) in board.occupied() {
        occupied.toggle(to_shakmaty(square));
        if piece.player == Player::White {
            white.toggle(to_shakmaty(square));
        }
    }

    for (square, piece) in board.occupied() {
        let sq = to_shakmaty(square);
        let attacked = match piece.kind {
            PieceKind::Pawn => continue,
            PieceKind::Knight => attacks::knight_attacks(sq),
            PieceKind::Bishop => attacks::bishop_attacks(sq, occupied),
            PieceKind::Rook => attacks::rook_attacks(sq, occupied),
            PieceKind::Queen => attacks::queen_attacks(sq, occupied),
            PieceKind::King => attacks::king_attacks(sq),
        };
        let own = match piece.player {
            Player::White => white,
            Player::Black => occupied & !white,
        };
        let expected: HashSet<Square> = (attacked & !own).into_iter().map(Square::from).collect();

        assert_eq!(
            moves_at(&board, square),
            expected,
            "{:?} {:?} on {square}",
            piece.player,
            piece.kind
        );
    }
}
