use serde::Deserialize;

use chess_rules::{Board, Game, GameStatus};

#[derive(Deserialize)]
struct PositionSet {
    perft: Vec<PerftCase>,
    mates: Vec<MateCase>,
}

#[derive(Deserialize)]
struct PerftCase {
    name: String,
    fen: String,
    /// Expected leaf counts for depth 1, 2, ...
    nodes: Vec<u64>,
}

#[derive(Deserialize)]
struct MateCase {
    name: String,
    fen: String,
    #[serde(rename = "move")]
    uci: String,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn perft_suite() {
    for case in load().perft {
        let board = Board::from_fen(&case.fen).expect("fixture FEN must parse");
        for (depth, &expected) in case.nodes.iter().enumerate() {
            let depth = depth + 1;
            assert_eq!(
                board.perft(depth),
                expected,
                "perft mismatch for '{}' at depth {}",
                case.name,
                depth
            );
        }
    }
}

#[test]
fn mate_in_one_suite() {
    for case in load().mates {
        let mut game = Game::from_fen(&case.fen).expect("fixture FEN must parse");
        assert!(!game.status().is_terminal(), "'{}' starts finished", case.name);

        let outcome = game.play_uci(&case.uci).unwrap_or_else(|err| {
            panic!("'{}': {} rejected: {}", case.name, case.uci, err)
        });
        assert_eq!(
            outcome.status,
            GameStatus::Checkmate,
            "mate in one failed for '{}' ({})",
            case.name,
            case.fen
        );
        assert!(game.legal_moves().is_empty());
    }
}

#[test]
fn fixture_positions_round_trip() {
    let set = load();
    let fens = set
        .perft
        .iter()
        .map(|c| c.fen.as_str())
        .chain(set.mates.iter().map(|c| c.fen.as_str()));
    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }
}
