//! Move generation: pseudo-legal enumeration per piece type, then the
//! legality filter that discards moves leaving the mover's king attacked.

mod castling;
mod leapers;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, GameError, Move, MoveList, Piece, PieceKind, Square};

impl Board {
    /// Append the pseudo-legal moves of `piece` standing on `from`.
    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, moves),
            PieceKind::Knight => self.generate_knight_moves(from, piece, moves),
            PieceKind::Bishop => self.generate_sliding_moves(from, piece, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.generate_sliding_moves(from, piece, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => self.generate_sliding_moves(from, piece, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => {
                self.generate_king_moves(from, piece, moves);
                self.generate_castling_moves(from, piece, moves);
            }
        }
    }

    /// The piece on `square`, provided it belongs to the side to move.
    fn own_piece_at(&self, square: Square) -> Result<Piece, GameError> {
        match self.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move => Ok(piece),
            _ => Err(GameError::InvalidSquare { square }),
        }
    }

    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces() {
            if piece.color == self.side_to_move {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    /// Pseudo-legal moves of the piece on `square`.
    ///
    /// Fails with [`GameError::InvalidSquare`] if the square is empty or holds a
    /// piece of the side not to move.
    pub fn pseudo_legal_moves_from(&self, square: Square) -> Result<MoveList, GameError> {
        let piece = self.own_piece_at(square)?;
        let mut moves = MoveList::new();
        self.generate_piece_moves(square, piece, &mut moves);
        Ok(moves)
    }

    /// Squares the piece on `square` can pseudo-legally reach, without duplicates
    /// (the four promotion moves to one square count once).
    pub fn pseudo_legal_destinations(&self, square: Square) -> Result<Vec<Square>, GameError> {
        let moves = self.pseudo_legal_moves_from(square)?;
        let mut destinations: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        destinations.sort_unstable();
        destinations.dedup();
        Ok(destinations)
    }

    /// Apply `mv` to a scratch copy and report whether the mover's king is safe.
    fn leaves_king_safe(&self, mv: &Move) -> bool {
        let color = mv.color();
        let mut scratch = *self;
        scratch.make_move(*mv);
        let king_sq = if mv.piece().kind == PieceKind::King {
            Some(mv.to())
        } else {
            scratch.find_king(color)
        };
        king_sq.is_some_and(|sq| !scratch.is_square_attacked(sq, color.opponent()))
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        moves.retain(|m| self.leaves_king_safe(m));
        moves
    }

    /// Legal moves of the piece on `square`.
    pub fn legal_moves_from(&self, square: Square) -> Result<MoveList, GameError> {
        let mut moves = self.pseudo_legal_moves_from(square)?;
        moves.retain(|m| self.leaves_king_safe(m));
        Ok(moves)
    }

    /// Returns true if the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.pseudo_legal_moves()
            .iter()
            .any(|m| self.leaves_king_safe(m))
    }

    /// Check a single candidate move, e.g. one handed in from outside the engine.
    ///
    /// The move must be one the generator produces for its origin square in this
    /// position, and it must not leave the mover's king attacked.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.pseudo_legal_moves_from(mv.from())
            .is_ok_and(|moves| moves.contains(mv))
            && self.leaves_king_safe(mv)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| {
                let mut next = *self;
                next.make_move(mv);
                next.perft(depth - 1)
            })
            .sum()
    }
}
