use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, PieceKind, Square};

/// Ranks a pawn may legally occupy, 0-indexed
const PAWN_RANKS: std::ops::RangeInclusive<u8> = 1..=6;

/// Largest halfmove clock or fullmove number a position may carry
pub const MAX_MOVE_COUNTER: u32 = u16::MAX as u32;

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Accepts the full six-field form or the four-field form without move
    /// counters (which then default to `0 1`). Besides the syntax, the position
    /// itself is checked: move counters up to [`MAX_MOVE_COUNTER`], one king
    /// per side, no more material than promotions allow, no pawn on the first
    /// or last rank, an en passant square only on the rank behind a
    /// just-advanced pawn, and the side that just moved not left in check.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    /// assert!(board.castling_rights().has(chess_rules::Color::White, true));
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = parse_castling(parts[2])?;
        board.en_passant_target = parse_en_passant(parts[3], board.side_to_move)?;

        if parts.len() == 6 {
            board.halfmove_clock = parse_clock(parts[4])?;
            board.fullmove_number = parse_clock(parts[5])?;
            if board.fullmove_number == 0 {
                return Err(FenError::InvalidClock {
                    found: parts[5].to_string(),
                });
            }
        }

        board.validate()?;
        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Encode to FEN, refusing boards that do not hold exactly one king per side.
    pub fn try_to_fen(&self) -> Result<String, FenError> {
        self.check_kings()?;
        Ok(self.to_fen())
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move. A four-character pawn move onto the
    /// last rank is taken as a queen promotion.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("g1f3").unwrap();
    /// assert_eq!(mv.notation(), "Ng1-f3");
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: uci.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            Some(c) => {
                let kind = PieceKind::from_char(c)
                    .filter(|kind| kind.is_promotion_target())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(kind)
            }
            None => None,
        };

        let legal = self.legal_moves();
        let mut candidates = legal
            .iter()
            .filter(|mv| mv.from() == from && mv.to() == to);
        let found = match promotion {
            Some(kind) => candidates.find(|mv| mv.promotion() == Some(kind)),
            None => candidates
                .find(|mv| mv.promotion().is_none() || mv.promotion() == Some(PieceKind::Queen)),
        };

        found.copied().ok_or_else(|| MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })
    }

    /// Position-level consistency checks shared by FEN decoding and the builder.
    pub(crate) fn validate(&self) -> Result<(), FenError> {
        for counter in [self.halfmove_clock, self.fullmove_number] {
            if counter > MAX_MOVE_COUNTER {
                return Err(FenError::InvalidClock {
                    found: counter.to_string(),
                });
            }
        }

        self.check_kings()?;

        if let Some(color) = Color::BOTH
            .into_iter()
            .find(|&color| !self.has_reachable_material(color))
        {
            return Err(FenError::TooManyPieces { color });
        }

        if let Some((square, _)) = self
            .pieces()
            .find(|(sq, p)| p.kind == PieceKind::Pawn && !PAWN_RANKS.contains(&sq.rank()))
        {
            return Err(FenError::PawnOnBackRank { square });
        }

        if let Some(ep) = self.en_passant_target {
            // The target sits behind a pawn of the side that just moved
            let expected_rank = match self.side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if ep.rank() != expected_rank {
                return Err(FenError::InvalidEnPassant {
                    found: ep.to_string(),
                });
            }
        }

        if self.is_in_check(self.side_to_move.opponent()) {
            return Err(FenError::OpponentInCheck);
        }
        Ok(())
    }

    fn check_kings(&self) -> Result<(), FenError> {
        for color in Color::BOTH {
            let found = self.count(PieceKind::King, color);
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }
        Ok(())
    }
}

fn parse_placement(board: &mut Board, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file: usize = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: rank as usize + 1,
                        files: file + 1,
                    });
                }
                board.set_piece(Square::at(file as u8, rank), piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: rank as usize + 1,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, kingside) = match c {
            'K' => (Color::White, true),
            'Q' => (Color::White, false),
            'k' => (Color::Black, true),
            'q' => (Color::Black, false),
            _ => return Err(FenError::InvalidCastling { char: c }),
        };
        if rights.has(color, kingside) {
            return Err(FenError::InvalidCastling { char: c });
        }
        rights.set(color, kingside);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let square: Square = field.parse().map_err(|_| invalid())?;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if square.rank() != expected_rank {
        return Err(invalid());
    }
    Ok(Some(square))
}

fn parse_clock(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidClock {
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
