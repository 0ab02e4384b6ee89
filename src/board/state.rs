use std::fmt;

use crate::zobrist::KEYS;

use super::{CastlingRights, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess position.
///
/// `Board` is a plain `Copy` value: exploring a hypothetical continuation is
/// just a matter of copying it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.set_piece(Square::at(file, 0), Piece::new(*kind, Color::White));
            board.set_piece(Square::at(file, 7), Piece::new(*kind, Color::Black));
            board.set_piece(Square::at(file, 1), Piece::new(PieceKind::Pawn, Color::White));
            board.set_piece(Square::at(file, 6), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) const fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// All occupied squares with their pieces, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Piece placement indexed as `[rank][file]`, for renderers.
    #[must_use]
    pub fn placement(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (sq, piece) in self.pieces() {
            grid[sq.rank() as usize][sq.file() as usize] = Some(piece);
        }
        grid
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    pub(crate) fn count(&self, kind: PieceKind, color: Color) -> usize {
        let wanted = Piece::new(kind, color);
        self.squares.iter().filter(|p| **p == Some(wanted)).count()
    }

    /// Zobrist key of the position: placement, side to move, castling rights
    /// and en passant target. Clocks are not part of the key.
    #[must_use]
    pub fn position_key(&self) -> u64 {
        self.pieces()
            .fold(0, |key, (sq, piece)| key ^ KEYS.piece(piece, sq))
            ^ KEYS.side(self.side_to_move)
            ^ KEYS.castling(self.castling_rights)
            ^ KEYS.en_passant(self.en_passant_target)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    /// Text diagram, rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square::at(file, rank))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
