//! Error types for chess board operations.

use std::error::Error;
use std::fmt;

use super::{Color, GameStatus, PieceKind, Square};

/// Error type for move commands and game-record operations.
///
/// Every variant is a caller input error: when one is returned, the game
/// it came from has not been modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The square is empty, or holds a piece of the side not to move where one
    /// of the side to move was required
    InvalidSquare { square: Square },
    /// The piece on the square belongs to the side not to move
    WrongTurn { square: Square },
    /// The move is not in the legal set: unreachable, leaves the own king
    /// attacked, or violates a castling/en passant precondition
    IllegalMove { from: Square, to: Square },
    /// Missing, superfluous or invalid promotion choice
    InvalidPromotion { piece: Option<PieceKind> },
    /// A FEN string could not be decoded (or a board could not be encoded)
    MalformedNotation(FenError),
    /// A UCI move string could not be matched to a legal move
    MoveText(MoveParseError),
    /// `undo` was called with an empty history
    NoMoveToUndo,
    /// The game already reached a terminal status
    GameOver { status: GameStatus },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSquare { square } => {
                write!(f, "No piece of the side to move on {square}")
            }
            GameError::WrongTurn { square } => {
                write!(f, "The piece on {square} belongs to the side not to move")
            }
            GameError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            GameError::InvalidPromotion { piece: Some(piece) } => {
                write!(f, "Invalid promotion choice '{piece}'")
            }
            GameError::InvalidPromotion { piece: None } => {
                write!(f, "A promotion choice is required for this move")
            }
            GameError::MalformedNotation(err) => write!(f, "Malformed FEN: {err}"),
            GameError::MoveText(err) => write!(f, "Unusable move text: {err}"),
            GameError::NoMoveToUndo => write!(f, "No move to undo"),
            GameError::GameOver { status } => {
                write!(f, "The game is over ({status})")
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::MalformedNotation(err) => Some(err),
            GameError::MoveText(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FenError> for GameError {
    fn from(err: FenError) -> Self {
        GameError::MalformedNotation(err)
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        GameError::MoveText(err)
    }
}

/// Error type for FEN parsing (and encoding) failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have 4 or 6 space-separated fields
    WrongFieldCount { found: usize },
    /// Placement field must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid or repeated castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a valid count
    InvalidClock { found: String },
    /// Each side must have exactly one king
    KingCount { color: Color, found: usize },
    /// More pieces than the initial set plus promotions can explain
    TooManyPieces { color: Color },
    /// Pawns cannot stand on the first or last rank
    PawnOnBackRank { square: Square },
    /// The side that just moved is left in check
    OpponentInCheck,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 4 or 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files instead of 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::TooManyPieces { color } => {
                write!(f, "{color} has more pieces than promotions allow")
            }
            FenError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            FenError::OpponentInCheck => {
                write!(f, "The side not to move is in check")
            }
        }
    }
}

impl Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Square index out of bounds (must be 0-63)
    IndexOutOfBounds { index: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl Error for SquareError {}
