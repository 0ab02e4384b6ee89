//! The game record: a board plus everything needed to undo moves and detect
//! repetitions.
//!
//! [`Game`] is the mutation entry point for callers such as a user interface
//! or an external move-deciding service. Every command validates completely
//! before touching any state, so a rejected command leaves the game unchanged.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameStatus, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let mut game = Game::new();
//! let outcome = game.make_move(sq("e2"), sq("e4"), None).unwrap();
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! game.undo().unwrap();
//! assert_eq!(game.to_notation(), chess_rules::Board::new().to_fen());
//! ```

use log::{debug, trace};

use crate::board::{
    Board, Color, GameError, GameStatus, Move, MoveList, Piece, PieceKind, RepetitionTable, Square,
    UnmakeInfo,
};

/// The committed move together with the status it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub status: GameStatus,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<(Move, UnmakeInfo)>,
    repetitions: RepetitionTable,
    /// Set by resignation or draw agreement; everything else is derived
    conclusion: Option<GameStatus>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::start(Board::new())
    }

    /// A game starting from an arbitrary board, such as one from
    /// [`BoardBuilder::build`](crate::BoardBuilder::build).
    ///
    /// The board gets the same position checks as a FEN string.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        board.validate()?;
        Ok(Self::start(board))
    }

    /// A game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let board = Board::from_fen(fen)?;
        Ok(Self::start(board))
    }

    fn start(board: Board) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(board.position_key());
        Game {
            board,
            history: Vec::new(),
            repetitions,
            conclusion: None,
        }
    }

    /// The current position.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Where the game stands. Derived from the position and history on every call.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(conclusion) = self.conclusion {
            return conclusion;
        }
        let count = self.repetitions.get(self.board.position_key());
        self.board.evaluate_status(count)
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves()
    }

    /// Legal moves of the piece on `square`.
    ///
    /// Fails with `InvalidSquare` unless the square holds a piece of the side to move.
    pub fn legal_moves_from(&self, square: Square) -> Result<MoveList, GameError> {
        self.board.legal_moves_from(square)
    }

    /// Copy of the placement, indexed `[rank][file]` with rank 0 the first rank.
    #[must_use]
    pub fn board_snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        self.board.placement()
    }

    /// Pieces no longer on the board, White's first.
    #[must_use]
    pub fn captured_pieces(&self) -> Vec<Piece> {
        self.board.captured_pieces()
    }

    /// The current position in FEN.
    #[must_use]
    pub fn to_notation(&self) -> String {
        self.board.to_fen()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    /// The move history in human-readable form (`Ng1-f3`, `O-O`, `e7-e8=Q`).
    #[must_use]
    pub fn history_notation(&self) -> Vec<String> {
        self.history().map(Move::notation).collect()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|(mv, _)| *mv)
    }

    /// How often the current position has occurred, this occurrence included.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.board.position_key())
    }

    /// Play the piece on `from` to `to`.
    ///
    /// Checks run in order: the game must not be over, `from` must hold a piece
    /// of the side to move, the promotion choice must fit the move, and the move
    /// must be legal.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, GameError> {
        match self.resolve_move(from, to, promotion) {
            Ok(mv) => Ok(self.commit(mv)),
            Err(err) => {
                trace!("rejected {from}{to}: {err}");
                Err(err)
            }
        }
    }

    /// Play a move given in UCI notation (`e2e4`, `e7e8q`).
    ///
    /// A promotion without a suffix becomes a queen.
    pub fn play_uci(&mut self, uci: &str) -> Result<MoveOutcome, GameError> {
        let resolved = self
            .ensure_not_over()
            .and_then(|()| self.board.parse_move(uci).map_err(GameError::from));
        match resolved {
            Ok(mv) => Ok(self.commit(mv)),
            Err(err) => {
                trace!("rejected {uci}: {err}");
                Err(err)
            }
        }
    }

    fn ensure_not_over(&self) -> Result<(), GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::GameOver { status });
        }
        Ok(())
    }

    fn resolve_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, GameError> {
        self.ensure_not_over()?;

        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::InvalidSquare { square: from })?;
        if piece.color != self.board.side_to_move() {
            return Err(GameError::WrongTurn { square: from });
        }

        let promotes =
            piece.kind == PieceKind::Pawn && to.rank() == piece.color.pawn_promotion_rank();
        match promotion {
            Some(kind) if !promotes || !kind.is_promotion_target() => {
                return Err(GameError::InvalidPromotion { piece: Some(kind) });
            }
            None if promotes => {
                return Err(GameError::InvalidPromotion { piece: None });
            }
            _ => {}
        }

        self.board
            .legal_moves_from(from)?
            .iter()
            .find(|mv| mv.to() == to && mv.promotion() == promotion)
            .copied()
            .ok_or(GameError::IllegalMove { from, to })
    }

    fn commit(&mut self, mv: Move) -> MoveOutcome {
        let info = self.board.make_move(mv);
        self.history.push((mv, info));
        self.repetitions.increment(self.board.position_key());
        let status = self.status();
        debug!("played {} ({}), status {}", mv.notation(), mv, status);
        MoveOutcome { mv, status }
    }

    /// Take back the last move, restoring the previous position exactly.
    ///
    /// Also withdraws a resignation or draw agreement.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let (mv, info) = self.history.pop().ok_or(GameError::NoMoveToUndo)?;
        self.repetitions.decrement(self.board.position_key());
        self.board.unmake_move(mv, info);
        self.conclusion = None;
        debug!("undid {}", mv.notation());
        Ok(mv)
    }

    /// Return to the standard initial position with an empty history.
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }

    /// Replace the game with one starting from `fen`.
    ///
    /// On error the current game is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), GameError> {
        match Game::from_fen(fen) {
            Ok(game) => {
                *self = game;
                debug!("loaded position {fen}");
                Ok(())
            }
            Err(err) => {
                trace!("rejected position {fen}: {err}");
                Err(err)
            }
        }
    }

    /// The side to move resigns.
    pub fn resign(&mut self) -> Result<GameStatus, GameError> {
        self.ensure_not_over()?;
        let status = GameStatus::Resignation {
            winner: self.board.side_to_move().opponent(),
        };
        self.conclusion = Some(status);
        debug!("{}", status);
        Ok(status)
    }

    /// Both players agree to a draw.
    pub fn agree_draw(&mut self) -> Result<GameStatus, GameError> {
        self.ensure_not_over()?;
        self.conclusion = Some(GameStatus::DrawByAgreement);
        debug!("{}", GameStatus::DrawByAgreement);
        Ok(GameStatus::DrawByAgreement)
    }
}
