//! Game status classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Halfmove clock value at which the fifty-move rule applies (50 moves per side)
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Occurrence count at which a position is drawn by repetition
pub const REPETITION_LIMIT: u32 = 3;

/// Where a game stands.
///
/// Always derived from the position and its history; nothing stores a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMoveRule,
    DrawByInsufficientMaterial,
    /// One side resigned
    Resignation { winner: Color },
    DrawByAgreement,
}

impl GameStatus {
    /// Returns true once no further moves may be played
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress | GameStatus::Check)
    }

    /// Returns true for every drawn outcome
    #[inline]
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawByRepetition
                | GameStatus::DrawByFiftyMoveRule
                | GameStatus::DrawByInsufficientMaterial
                | GameStatus::DrawByAgreement
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::DrawByRepetition => write!(f, "draw by threefold repetition"),
            GameStatus::DrawByFiftyMoveRule => write!(f, "draw by 50-move rule"),
            GameStatus::DrawByInsufficientMaterial => write!(f, "draw by insufficient material"),
            GameStatus::Resignation { winner } => write!(f, "resignation - {winner} wins"),
            GameStatus::DrawByAgreement => write!(f, "draw by agreement"),
        }
    }
}

impl Board {
    /// Classify the position.
    ///
    /// `repetition_count` is how many times this exact position (placement, side
    /// to move, castling rights, en passant target) has occurred in the game so
    /// far, the current occurrence included. The checks run in a fixed order and
    /// the first match wins: repetition, fifty-move rule, insufficient material,
    /// checkmate, stalemate, check.
    #[must_use]
    pub fn evaluate_status(&self, repetition_count: u32) -> GameStatus {
        if repetition_count >= REPETITION_LIMIT {
            return GameStatus::DrawByRepetition;
        }
        if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            return GameStatus::DrawByFiftyMoveRule;
        }
        if self.has_insufficient_material() {
            return GameStatus::DrawByInsufficientMaterial;
        }

        let in_check = self.is_in_check(self.side_to_move);
        match (in_check, self.has_legal_move()) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Returns true if the side to move is checkmated
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Returns true if the side to move has no legal move but is not in check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }
}
