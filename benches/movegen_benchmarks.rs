//! Benchmarks for move generation and game status evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::{Board, Game};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame = Board::from_fen(MIDDLEGAME).unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));
    group.bench_function("kiwipete_pseudo_legal", |b| {
        b.iter(|| black_box(kiwipete.pseudo_legal_moves()))
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    group.bench_function("evaluate_kiwipete", |b| {
        b.iter(|| black_box(kiwipete.evaluate_status(1)))
    });

    group.bench_function("make_and_undo_game_move", |b| {
        let mut game = Game::from_fen(MIDDLEGAME).unwrap();
        b.iter(|| {
            game.play_uci(black_box("f3g5")).unwrap();
            game.undo().unwrap();
        })
    });

    group.bench_function("fen_round_trip", |b| {
        b.iter(|| Board::from_fen(black_box(&kiwipete.to_fen())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_status);
criterion_main!(benches);
