//! Chess board representation and rules.
//!
//! A mailbox board with full rules support: castling, en passant, promotion,
//! check detection and every end-of-game condition.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, GameStatus};
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.evaluate_status(1), GameStatus::InProgress);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod history;
mod make_unmake;
mod material;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, GameError, MoveParseError, SquareError};
pub use fen::MAX_MOVE_COUNTER;
pub use history::UnmakeInfo;
pub use state::Board;
pub use status::{GameStatus, FIFTY_MOVE_LIMIT, REPETITION_LIMIT};
pub use types::{
    CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
};

pub(crate) use history::RepetitionTable;
pub(crate) use types::MoveFlag;
