use super::super::{Board, Move, MoveFlag, MoveList, Piece, Square};

impl Board {
    /// Ray-cast along each direction: empty squares are quiet moves, the first
    /// enemy piece is a capture that ends the ray, a friendly piece ends it before.
    pub(super) fn generate_sliding_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in directions {
            let mut current = from.offset(df, dr);
            while let Some(to) = current {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, None, None, MoveFlag::Normal)),
                    Some(target) => {
                        if target.color != piece.color {
                            let mv = Move::new(from, to, piece, Some(target), None, MoveFlag::Normal);
                            moves.push(mv);
                        }
                        break;
                    }
                }
                current = to.offset(df, dr);
            }
        }
    }
}
