use super::super::attacks::{KING_OFFSETS, KNIGHT_OFFSETS};
use super::super::{Board, Move, MoveFlag, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_knight_moves(&self, from: Square, knight: Piece, moves: &mut MoveList) {
        self.generate_jumps(from, knight, &KNIGHT_OFFSETS, moves);
    }

    pub(super) fn generate_king_moves(&self, from: Square, king: Piece, moves: &mut MoveList) {
        self.generate_jumps(from, king, &KING_OFFSETS, moves);
    }

    /// Fixed-offset moves onto empty squares or enemy pieces.
    fn generate_jumps(
        &self,
        from: Square,
        piece: Piece,
        offsets: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in offsets {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to, piece, None, None, MoveFlag::Normal)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::new(from, to, piece, Some(target), None, MoveFlag::Normal));
                }
                Some(_) => {}
            }
        }
    }
}
