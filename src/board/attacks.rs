//! Attack detection shared by the legality filter, castling and status code.

use super::{Board, Color, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Returns true if any piece of `attacker_color` could capture on `square`.
    ///
    /// Works backwards from the target: a knight of `attacker_color` attacks the
    /// square exactly when a knight standing on the square would attack it, and
    /// likewise for every other pattern. Pawn pushes never attack.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let has = |sq: Option<Square>, kind: PieceKind| {
            sq.and_then(|sq| self.piece_at(sq)) == Some(Piece::new(kind, attacker_color))
        };

        // Attacking pawns sit one rank behind the target from their own point of view
        let back = -attacker_color.pawn_direction();
        if has(square.offset(-1, back), PieceKind::Pawn)
            || has(square.offset(1, back), PieceKind::Pawn)
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| has(square.offset(df, dr), PieceKind::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| has(square.offset(df, dr), PieceKind::King))
        {
            return true;
        }

        self.ray_hits(square, &ROOK_DIRECTIONS, attacker_color, PieceKind::Rook)
            || self.ray_hits(square, &BISHOP_DIRECTIONS, attacker_color, PieceKind::Bishop)
    }

    /// Returns true if the first piece met along any of `directions` is a `slider`
    /// or queen of `color`.
    fn ray_hits(
        &self,
        from: Square,
        directions: &[(i8, i8)],
        color: Color,
        slider: PieceKind,
    ) -> bool {
        directions.iter().any(|&(df, dr)| {
            let mut current = from.offset(df, dr);
            while let Some(sq) = current {
                if let Some(piece) = self.piece_at(sq) {
                    return piece.color == color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen);
                }
                current = sq.offset(df, dr);
            }
            false
        })
    }

    /// Returns true if the king of `color` is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }
}
