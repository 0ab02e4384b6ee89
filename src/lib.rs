//! Chess rules engine: legal move generation, special moves, game status and
//! FEN encoding for standard chess.
//!
//! [`Board`] is a plain position value with the rules on it; [`Game`] adds the
//! move history, undo and repetition tracking, and is the entry point for
//! playing moves.

pub mod board;
pub mod game;
mod zobrist;

pub use board::{
    Board, BoardBuilder, CastlingRights, Color, FenError, GameError, GameStatus, Move, MoveList,
    MoveParseError, Piece, PieceKind, Square, SquareError,
};
pub use game::{Game, MoveOutcome};
