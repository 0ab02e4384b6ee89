//! Property-based tests using proptest.

use crate::board::{Board, Move, UnmakeInfo};
use crate::game::Game;
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position.
fn random_position(seed: u64, num_moves: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.make_move(mv);
    }
    board
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_key = board.position_key();
        let initial_fen = board.to_fen();

        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();
        for _ in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let info = board.make_move(mv);
            history.push((mv, info));
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.position_key(), initial_key);
        prop_assert_eq!(board.to_fen(), initial_fen);
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(restored, Ok(board));
        prop_assert_eq!(board.try_to_fen(), Ok(fen));
    }

    /// Property: legal moves are always legal (no self-check)
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let mover = board.side_to_move();

        for mv in board.legal_moves().iter() {
            let mut after = board;
            after.make_move(*mv);
            prop_assert!(!after.is_in_check(mover),
                "Legal move left king in check: {:?}", mv);
            prop_assert!(board.is_legal(mv));
        }
    }

    /// Property: the legal set is exactly the pseudo-legal moves that pass the filter
    #[test]
    fn prop_legal_subset_of_pseudo_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let pseudo = board.pseudo_legal_moves();
        let legal = board.legal_moves();

        for mv in legal.iter() {
            prop_assert!(pseudo.contains(mv));
        }
        prop_assert_eq!(board.has_legal_move(), !legal.is_empty());
    }

    /// Property: undoing a game brings back every earlier FEN in reverse order
    #[test]
    fn prop_game_undo_walks_back(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut fens = vec![game.to_notation()];

        for _ in 0..num_moves {
            if game.status().is_terminal() {
                break;
            }
            let moves = game.legal_moves();
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let promotion = mv.promotion();
            game.make_move(mv.from(), mv.to(), promotion).unwrap();
            fens.push(game.to_notation());
        }

        fens.pop();
        while let Some(expected) = fens.pop() {
            game.undo().unwrap();
            prop_assert_eq!(game.to_notation(), expected);
        }
        prop_assert_eq!(game.repetition_count(), 1);
        prop_assert!(game.undo().is_err());
    }
}
