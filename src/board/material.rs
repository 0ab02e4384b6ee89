//! Material bookkeeping: insufficient-material draws and captured pieces.

use super::{Board, Color, Piece, PieceKind, Square};

/// Piece counts of one side in the initial position, indexed by `PieceKind::index`.
const STARTING_COUNTS: [usize; 6] = [8, 2, 2, 2, 1, 1];

impl Board {
    /// Returns true if neither side can possibly deliver checkmate.
    ///
    /// Recognized: king vs king, king and one minor piece vs king, and king and
    /// bishop vs king and bishop with both bishops on squares of the same color.
    #[must_use]
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Square, Piece)> = Vec::with_capacity(4);
        for (sq, piece) in self.pieces() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((sq, piece)),
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        match minors.as_slice() {
            [] | [_] => true,
            [(sq_a, a), (sq_b, b)] => {
                a.kind == PieceKind::Bishop
                    && b.kind == PieceKind::Bishop
                    && a.color != b.color
                    && sq_a.is_light() == sq_b.is_light()
            }
            _ => false,
        }
    }

    /// Whether `color`'s material could arise from the initial set: at most
    /// eight pawns, and every knight, bishop, rook or queen beyond the initial
    /// count paid for by a pawn no longer on the board.
    pub(crate) fn has_reachable_material(&self, color: Color) -> bool {
        let pawns = self.count(PieceKind::Pawn, color);
        let Some(missing_pawns) = STARTING_COUNTS[PieceKind::Pawn.index()].checked_sub(pawns)
        else {
            return false;
        };
        let promoted: usize = [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ]
        .into_iter()
        .map(|kind| {
            self.count(kind, color)
                .saturating_sub(STARTING_COUNTS[kind.index()])
        })
        .sum();
        promoted <= missing_pawns
    }

    /// Pieces missing from the board compared with the initial set, White's
    /// first, each side ordered pawn to queen.
    ///
    /// A side with more knights, bishops, rooks or queens than it started with
    /// got them by promotion, so each surplus piece accounts for one missing
    /// pawn that was not captured.
    #[must_use]
    pub fn captured_pieces(&self) -> Vec<Piece> {
        let mut captured = Vec::new();
        for color in Color::BOTH {
            let mut promoted = 0;
            let mut missing = [0usize; 6];
            for kind in PieceKind::ALL {
                let start = STARTING_COUNTS[kind.index()];
                let now = self.count(kind, color);
                if now > start {
                    promoted += now - start;
                } else {
                    missing[kind.index()] = start - now;
                }
            }
            missing[PieceKind::Pawn.index()] =
                missing[PieceKind::Pawn.index()].saturating_sub(promoted);

            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
            ] {
                for _ in 0..missing[kind.index()] {
                    captured.push(Piece::new(kind, color));
                }
            }
        }
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insufficient(fen: &str) -> bool {
        Board::from_fen(fen).unwrap().has_insufficient_material()
    }

    #[test]
    fn test_insufficient_material_cases() {
        assert!(insufficient("8/8/8/8/8/8/8/K1k5 w - - 0 1"));
        assert!(insufficient("8/8/8/8/8/8/6N1/K1k5 w - - 0 1"));
        assert!(insufficient("8/8/8/8/8/8/6b1/K1k5 w - - 0 1"));
        // Bishops on c1 and f8 are both on dark squares
        assert!(insufficient("5b2/8/8/8/8/8/8/K1B1k3 w - - 0 1"));
    }

    #[test]
    fn test_sufficient_material_cases() {
        assert!(!insufficient("8/8/8/8/8/8/6Q1/K1k5 w - - 0 1"));
        assert!(!insufficient("8/8/8/8/8/8/6P1/K1k5 w - - 0 1"));
        assert!(!insufficient("8/8/8/8/8/8/5NN1/K1k5 w - - 0 1"));
        // Opposite-colored bishops: c1 is dark, c8 is light
        assert!(!insufficient("2b5/8/8/8/8/8/8/K1B1k3 w - - 0 1"));
        // Both bishops on one side is not in the list
        assert!(!insufficient("8/8/8/8/8/8/8/KBB1k3 w - - 0 1"));
    }

    #[test]
    fn test_no_captures_at_start() {
        assert!(Board::new().captured_pieces().is_empty());
    }

    #[test]
    fn test_captured_pieces_diff() {
        // White is missing the d1 queen; Black is missing two pawns and a knight
        let board =
            Board::from_fen("r1bqkbnr/pp1pp1pp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1").unwrap();
        let captured = board.captured_pieces();
        assert_eq!(
            captured,
            vec![
                Piece::new(PieceKind::Queen, Color::White),
                Piece::new(PieceKind::Pawn, Color::Black),
                Piece::new(PieceKind::Pawn, Color::Black),
                Piece::new(PieceKind::Knight, Color::Black),
            ]
        );
    }

    #[test]
    fn test_promoted_piece_is_not_a_capture() {
        // White has promoted a pawn to a second queen
        let board =
            Board::from_fen("rnbqkbn1/pppppp2/8/8/8/8/PPPPPPP1/RNBQKBNQ w Qq - 0 1").unwrap();
        let white: Vec<Piece> = board
            .captured_pieces()
            .into_iter()
            .filter(|p| p.color == Color::White)
            .collect();
        // White: 7 pawns, rook h1 replaced by a queen, so one rook is gone
        assert_eq!(white, vec![Piece::new(PieceKind::Rook, Color::White)]);
    }
}
