use super::super::{Board, Move, MoveFlag, MoveList, Piece, PieceKind, Square};

/// Per side: rook file, files that must be empty, files the king crosses
/// (its destination included), king destination file.
const KINGSIDE: (u8, &[u8], &[u8], u8) = (7, &[5, 6], &[5, 6], 6);
const QUEENSIDE: (u8, &[u8], &[u8], u8) = (0, &[1, 2, 3], &[3, 2], 2);

impl Board {
    /// Castling candidates for a king on its home square.
    ///
    /// Only produced when the right is still held, the rook is home, the squares
    /// between are empty, and neither the king's start square nor any square it
    /// crosses or lands on is attacked.
    pub(super) fn generate_castling_moves(&self, from: Square, king: Piece, moves: &mut MoveList) {
        let color = king.color;
        let rank = color.back_rank();
        if from != Square::at(4, rank) {
            return;
        }
        let enemy = color.opponent();
        if self.is_square_attacked(from, enemy) {
            return;
        }

        for (kingside, (rook_file, empty_files, path_files, to_file)) in
            [(true, KINGSIDE), (false, QUEENSIDE)]
        {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let rook = Piece::new(PieceKind::Rook, color);
            if self.piece_at(Square::at(rook_file, rank)) != Some(rook) {
                continue;
            }
            if !empty_files.iter().all(|&f| self.is_empty(Square::at(f, rank))) {
                continue;
            }
            if path_files
                .iter()
                .any(|&f| self.is_square_attacked(Square::at(f, rank), enemy))
            {
                continue;
            }

            let flag = if kingside {
                MoveFlag::CastleKingside
            } else {
                MoveFlag::CastleQueenside
            };
            moves.push(Move::new(from, Square::at(to_file, rank), king, None, None, flag));
        }
    }
}
