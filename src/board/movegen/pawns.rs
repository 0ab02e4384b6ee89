use super::super::make_unmake::en_passant_victim_square;
use super::super::{Board, Move, MoveFlag, MoveList, Piece, PieceKind, Square};

impl Board {
    pub(super) fn generate_pawn_moves(&self, from: Square, pawn: Piece, moves: &mut MoveList) {
        let color = pawn.color;
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(0, dir) {
            if self.is_empty(forward_sq) {
                push_pawn_move(from, forward_sq, pawn, None, moves);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(double_sq) = from.offset(0, 2 * dir) {
                        if self.is_empty(double_sq) {
                            moves.push(Move::new(
                                from,
                                double_sq,
                                pawn,
                                None,
                                None,
                                MoveFlag::DoublePawnPush,
                            ));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(df, dir) else {
                continue;
            };
            match self.piece_at(target_sq) {
                Some(target) if target.color != color => {
                    push_pawn_move(from, target_sq, pawn, Some(target), moves);
                }
                Some(_) => {}
                None if self.en_passant_target == Some(target_sq) => {
                    let candidate =
                        Move::new(from, target_sq, pawn, None, None, MoveFlag::EnPassant);
                    let victim = self.piece_at(en_passant_victim_square(candidate));
                    if victim == Some(Piece::new(PieceKind::Pawn, color.opponent())) {
                        moves.push(Move::new(
                            from,
                            target_sq,
                            pawn,
                            victim,
                            None,
                            MoveFlag::EnPassant,
                        ));
                    }
                }
                None => {}
            }
        }
    }
}

/// Push a pawn move, expanding it into one move per promotion choice when it
/// reaches the last rank.
fn push_pawn_move(
    from: Square,
    to: Square,
    pawn: Piece,
    captured: Option<Piece>,
    moves: &mut MoveList,
) {
    if to.rank() == pawn.color.pawn_promotion_rank() {
        for promo in PieceKind::PROMOTIONS {
            moves.push(Move::new(from, to, pawn, captured, Some(promo), MoveFlag::Normal));
        }
    } else {
        moves.push(Move::new(from, to, pawn, captured, None, MoveFlag::Normal));
    }
}
