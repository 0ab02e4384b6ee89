//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// Special-move classification carried by every [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) enum MoveFlag {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A fully resolved move.
///
/// Moves are only produced by the move generator, so every `Move` already
/// knows the piece it moves, the piece it captures (for en passant, the pawn
/// beside the destination), and whether it is a castle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<PieceKind>,
    flag: MoveFlag,
}

impl Move {
    #[inline]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<PieceKind>,
        flag: MoveFlag,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            promotion,
            flag,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece being moved (the pawn, for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Get the promotion piece type, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.is_castle_kingside() || self.is_castle_queenside()
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        matches!(self.flag, MoveFlag::CastleKingside)
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        matches!(self.flag, MoveFlag::CastleQueenside)
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.flag, MoveFlag::DoublePawnPush)
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// The color making this move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece.color
    }

    /// Returns true if this move resets the halfmove clock
    #[inline]
    #[must_use]
    pub const fn is_irreversible(self) -> bool {
        self.is_capture() || matches!(self.piece.kind, PieceKind::Pawn)
    }

    /// Human-readable long notation: `Ng1-f3`, `e4xd5`, `e7-e8=Q`, `O-O`.
    #[must_use]
    pub fn notation(self) -> String {
        if self.is_castle_kingside() {
            return "O-O".to_string();
        }
        if self.is_castle_queenside() {
            return "O-O-O".to_string();
        }

        let mut out = String::with_capacity(8);
        if self.piece.kind != PieceKind::Pawn {
            out.push(self.piece.kind.to_char().to_ascii_uppercase());
        }
        out.push_str(&self.from.to_string());
        out.push(if self.is_capture() { 'x' } else { '-' });
        out.push_str(&self.to.to_string());
        if let Some(promo) = self.promotion {
            out.push('=');
            out.push(promo.to_char().to_ascii_uppercase());
        }
        out
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    /// UCI long algebraic notation (`e2e4`, `e7e8q`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Typical upper bound on moves in a position, used as the initial capacity.
const MOVE_CAPACITY: usize = 256;

/// List of generated moves.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MOVE_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Keep only the moves matching `keep`.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    inner: std::vec::IntoIter<Move>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_notation_forms() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let quiet = Move::new(sq("g1"), sq("f3"), knight, None, None, MoveFlag::Normal);
        assert_eq!(quiet.notation(), "Ng1-f3");
        assert_eq!(quiet.to_string(), "g1f3");

        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let capture = Move::new(
            sq("e4"),
            sq("d5"),
            pawn,
            Some(black_pawn),
            None,
            MoveFlag::Normal,
        );
        assert_eq!(capture.notation(), "e4xd5");

        let promo = Move::new(
            sq("e7"),
            sq("e8"),
            pawn,
            None,
            Some(PieceKind::Queen),
            MoveFlag::Normal,
        );
        assert_eq!(promo.notation(), "e7-e8=Q");
        assert_eq!(promo.to_string(), "e7e8q");

        let king = Piece::new(PieceKind::King, Color::Black);
        let castle = Move::new(
            sq("e8"),
            sq("c8"),
            king,
            None,
            None,
            MoveFlag::CastleQueenside,
        );
        assert_eq!(castle.notation(), "O-O-O");
        assert!(castle.is_castling());
    }

    #[test]
    fn test_move_list_retain() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let mut list = MoveList::new();
        for to in ["a3", "a4", "b3"] {
            list.push(Move::new(sq("a2"), sq(to), pawn, None, None, MoveFlag::Normal));
        }
        list.retain(|m| m.to().file() == 0);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].to(), sq("a4"));
    }
}
