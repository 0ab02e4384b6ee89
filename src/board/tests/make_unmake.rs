//! Make/unmake move tests.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, PieceKind, Square, UnmakeInfo};
use rand::prelude::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn find_move(board: &Board, from: &str, to: &str, promotion: Option<PieceKind>) -> Move {
    for m in board.legal_moves().iter() {
        if m.from() == sq(from) && m.to() == sq(to) && m.promotion() == promotion {
            return *m;
        }
    }
    panic!("Expected move not found");
}

fn assert_round_trip(fen: &str, from: &str, to: &str, promotion: Option<PieceKind>) -> Board {
    let mut board = Board::from_fen(fen).unwrap();
    let original = board;
    let mv = find_move(&board, from, to, promotion);
    let info = board.make_move(mv);
    let after = board;
    board.unmake_move(mv, info);
    assert_eq!(board.to_fen(), fen);
    assert_eq!(board, original);
    assert_eq!(board.position_key(), original.position_key());
    after
}

#[test]
fn test_en_passant_make_unmake() {
    let after = assert_round_trip(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "e5",
        "f6",
        None,
    );
    assert!(after.piece_at(sq("f5")).is_none());
    assert_eq!(after.en_passant_target(), None);
}

#[test]
fn test_promotion_make_unmake() {
    let after = assert_round_trip("8/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7", "a8", Some(PieceKind::Queen));
    assert_eq!(
        after.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}

#[test]
fn test_promotion_capture_make_unmake() {
    let after = assert_round_trip(
        "1r5k/P7/8/8/8/8/8/K7 w - - 0 1",
        "a7",
        "b8",
        Some(PieceKind::Rook),
    );
    assert_eq!(
        after.piece_at(sq("b8")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
}

#[test]
fn test_castling_make_unmake() {
    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "g1", None);
    assert_eq!(
        after.piece_at(sq("f1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert!(after.piece_at(sq("h1")).is_none());
    assert_eq!(after.castling_rights().to_string(), "kq");

    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8", "c8", None);
    assert_eq!(
        after.piece_at(sq("d8")),
        Some(Piece::new(PieceKind::Rook, Color::Black))
    );
    assert_eq!(after.castling_rights().to_string(), "KQ");
    assert_eq!(after.fullmove_number(), 2);
}

#[test]
fn test_rook_capture_clears_castling_right() {
    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1", "a8", None);
    assert_eq!(after.castling_rights().to_string(), "Kk");
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let after = assert_round_trip(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "d2",
        "d4",
        None,
    );
    assert_eq!(after.en_passant_target(), Some(sq("d3")));
    assert_eq!(after.halfmove_clock(), 0);
}

#[test]
fn test_clocks_advance() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 7 12").unwrap();
    let mv = find_move(&board, "e8", "d8", None);
    board.make_move(mv);
    assert_eq!(board.halfmove_clock(), 8);
    assert_eq!(board.fullmove_number(), 13);
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn test_random_playout_unwinds() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut board = Board::new();
        let mut history: Vec<(Move, UnmakeInfo, String)> = Vec::new();
        for _ in 0..60 {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let before = board.to_fen();
            let info = board.make_move(mv);
            history.push((mv, info, before));
        }
        while let Some((mv, info, before)) = history.pop() {
            board.unmake_move(mv, info);
            assert_eq!(board.to_fen(), before);
        }
        assert_eq!(board, Board::new());
    }
}

#[test]
fn test_clocks_saturate_on_unchecked_boards() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(PieceKind::King, Color::White))
        .piece(sq("a1"), Piece::new(PieceKind::Rook, Color::White))
        .piece(sq("e8"), Piece::new(PieceKind::King, Color::Black))
        .side_to_move(Color::Black)
        .halfmove_clock(u32::MAX)
        .fullmove_number(u32::MAX)
        .build();
    let original = board;

    assert_eq!(board.legal_moves().len(), 5);
    let mv = find_move(&board, "e8", "e7", None);
    let info = board.make_move(mv);
    assert_eq!(board.halfmove_clock(), u32::MAX);
    assert_eq!(board.fullmove_number(), u32::MAX);

    board.unmake_move(mv, info);
    assert_eq!(board, original);
}
