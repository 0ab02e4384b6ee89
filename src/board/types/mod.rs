//! Core chess types.
//!
//! This module contains the value types shared by every part of the rules engine:
//! - `PieceKind`, `Color` and `Piece` - chess pieces
//! - `Square` - a board coordinate
//! - `Move` and `MoveList` - resolved moves
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use moves::MoveFlag;
