use std::collections::HashMap;

use super::{CastlingRights, Piece, Square};

/// Everything `make_move` destroys that the move itself cannot give back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured_piece: Option<Piece>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

/// Occurrence counts per position key.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }

    pub(crate) fn decrement(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_sub(1);
        self.set(hash, next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_drop_to_zero() {
        let mut table = RepetitionTable::new();
        assert_eq!(table.increment(42), 1);
        assert_eq!(table.increment(42), 2);
        assert_eq!(table.decrement(42), 1);
        assert_eq!(table.decrement(42), 0);
        assert_eq!(table.get(42), 0);
        assert!(table.counts.is_empty());
    }

    #[test]
    fn test_decrement_never_underflows() {
        let mut table = RepetitionTable::new();
        assert_eq!(table.decrement(7), 0);
    }
}
