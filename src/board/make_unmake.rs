use super::{Board, Color, Move, Piece, PieceKind, Square, UnmakeInfo};

/// Rook origin and destination squares for a castling move.
#[inline]
fn castling_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
    let rank = color.back_rank();
    if kingside {
        (Square::at(7, rank), Square::at(5, rank))
    } else {
        (Square::at(0, rank), Square::at(3, rank))
    }
}

/// The square of the pawn removed by an en passant capture.
#[inline]
pub(crate) fn en_passant_victim_square(mv: Move) -> Square {
    Square::at(mv.to().file(), mv.from().rank())
}

impl Board {
    /// Apply a move produced by the move generator and return what is needed to
    /// take it back.
    ///
    /// No legality checks happen here; the caller is expected to pass moves from
    /// [`Board::legal_moves`] (or pseudo-legal moves on a scratch copy).
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let info = UnmakeInfo {
            captured_piece: mv.captured(),
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };
        let color = mv.color();

        self.remove_piece(mv.from());
        if mv.is_en_passant() {
            self.remove_piece(en_passant_victim_square(mv));
        }
        let placed = mv
            .promotion()
            .map_or(mv.piece(), |kind| Piece::new(kind, color));
        self.set_piece(mv.to(), placed);

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(color, mv.is_castle_kingside());
            if let Some(rook) = self.remove_piece(rook_from) {
                self.set_piece(rook_to, rook);
            }
        }

        self.castling_rights.clear_for_square(mv.from());
        self.castling_rights.clear_for_square(mv.to());

        self.en_passant_target = if mv.is_double_pawn_push() {
            mv.from().offset(0, color.pawn_direction())
        } else {
            None
        };

        if mv.is_irreversible() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        info
    }

    /// Exactly reverse a `make_move` call.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let color = mv.color();

        self.remove_piece(mv.to());
        self.set_piece(mv.from(), mv.piece());

        if let Some(captured) = info.captured_piece {
            let square = if mv.is_en_passant() {
                en_passant_victim_square(mv)
            } else {
                mv.to()
            };
            self.set_piece(square, captured);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(color, mv.is_castle_kingside());
            if let Some(rook) = self.remove_piece(rook_to) {
                debug_assert_eq!(rook.kind, PieceKind::Rook);
                self.set_piece(rook_from, rook);
            }
        }

        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.side_to_move = color;
    }
}
