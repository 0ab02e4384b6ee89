//! Random keys combined into 64-bit position keys for repetition detection.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

/// One key per (piece, square), side, castling right and en passant file.
pub(crate) struct KeyTable {
    /// Indexed by `color * 6 + kind`, then square
    placement: [[u64; 64]; 12],
    black_to_move: u64,
    /// White kingside, White queenside, Black kingside, Black queenside
    castling: [u64; 4],
    en_passant_file: [u64; 8],
}

impl KeyTable {
    fn generate() -> Self {
        // Keys must not change between runs
        let mut rng = StdRng::seed_from_u64(0x00C4_E55E_ED00_0001);
        let mut table = KeyTable {
            placement: [[0; 64]; 12],
            black_to_move: 0,
            castling: [0; 4],
            en_passant_file: [0; 8],
        };

        table
            .placement
            .iter_mut()
            .flatten()
            .chain(table.castling.iter_mut())
            .chain(table.en_passant_file.iter_mut())
            .for_each(|key| *key = rng.gen());
        table.black_to_move = rng.gen();
        table
    }

    #[inline]
    pub(crate) fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.placement[piece.color.index() * 6 + piece.kind.index()][square.index()]
    }

    #[inline]
    pub(crate) fn side(&self, color: Color) -> u64 {
        match color {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }

    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let flags = [
            (Color::White, true),
            (Color::White, false),
            (Color::Black, true),
            (Color::Black, false),
        ];
        flags
            .iter()
            .zip(self.castling)
            .filter(|((color, kingside), _)| rights.has(*color, *kingside))
            .fold(0, |acc, (_, key)| acc ^ key)
    }

    /// Only the file matters: the rank follows from the side to move.
    #[inline]
    pub(crate) fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant_file[sq.file() as usize])
    }
}

pub(crate) static KEYS: Lazy<KeyTable> = Lazy::new(KeyTable::generate);
