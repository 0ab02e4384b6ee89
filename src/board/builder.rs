//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, PieceKind, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(sq("e1"), Piece::new(PieceKind::King, Color::White))
//!     .piece(sq("e8"), Piece::new(PieceKind::King, Color::Black))
//!     .piece(sq("a2"), Piece::new(PieceKind::Pawn, Color::White))
//!     .side_to_move(Color::White)
//!     .try_build()
//!     .unwrap();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.board.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.board.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.board.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.board.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.board.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.board.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number. Values below 1 are raised to 1.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.board.fullmove_number = if number == 0 { 1 } else { number };
        self
    }

    /// Build the board without checking it.
    ///
    /// Useful for partial positions in tests; status and move generation stay
    /// panic-free on such boards but are only meaningful with both kings present.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }

    /// Build the board, applying the same position checks as FEN decoding.
    pub fn try_build(self) -> Result<Board, FenError> {
        self.board.validate()?;
        Ok(self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn king(color: Color) -> Piece {
        Piece::new(PieceKind::King, color)
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), king(Color::White))
            .piece(sq("e8"), king(Color::Black))
            .build();

        assert!(board.piece_at(sq("e1")).is_some());
        assert!(board.piece_at(sq("e8")).is_some());
        assert!(board.piece_at(sq("a1")).is_none());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_castling_rights() {
        let board = BoardBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build();

        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_side_to_move_and_clocks() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), king(Color::White))
            .piece(sq("e8"), king(Color::Black))
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(30)
            .build();

        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 12 30");
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(sq("a1")).build();

        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }

    #[test]
    fn test_try_build_validates() {
        let missing_king = BoardBuilder::new()
            .piece(sq("e1"), king(Color::White))
            .try_build();
        assert!(matches!(missing_king, Err(FenError::KingCount { .. })));

        let bad_ep = BoardBuilder::new()
            .piece(sq("e1"), king(Color::White))
            .piece(sq("e8"), king(Color::Black))
            .en_passant(sq("e4"))
            .try_build();
        assert!(matches!(bad_ep, Err(FenError::InvalidEnPassant { .. })));
    }
}
