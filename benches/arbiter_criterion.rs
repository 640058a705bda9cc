use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_arbiter::arbiter::arbiter_top::classify_position;
use chess_arbiter::arbiter::game_result::GameResult;
use chess_arbiter::board::board_state::BoardState;
use chess_arbiter::board::chess_move::Move;
use chess_arbiter::board::zobrist::compute_position_hash;
use chess_arbiter::utils::fen_parser::STARTING_POSITION_FEN;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected: GameResult,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected: GameResult::InProgress,
    },
    BenchCase {
        name: "middlegame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected: GameResult::InProgress,
    },
    BenchCase {
        name: "lone_kings",
        fen: "8/8/8/3k4/8/3K4/8/8 w - - 0 1",
        expected: GameResult::InsufficientMaterial,
    },
    BenchCase {
        name: "fifty_move_rule",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 100 80",
        expected: GameResult::FiftyMoveRule,
    },
];

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbiter_classify");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(1));

    let legal_moves = vec![Move::new(12, 28)];

    for case in CASES {
        let board = BoardState::from_fen(case.fen).expect("bench FEN should parse");
        assert_eq!(classify_position(&board, &legal_moves, false), case.expected);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| classify_position(black_box(board), black_box(&legal_moves), false));
        });
    }

    group.finish();
}

fn bench_repetition_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbiter_repetition_scan");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(3));

    let legal_moves = vec![Move::new(12, 28)];

    for history_len in [16usize, 128, 512] {
        let mut board = BoardState::from_fen("8/8/8/3k4/8/8/4K3/7R w - - 0 1")
            .expect("bench FEN should parse");
        let current = compute_position_hash(&board);
        board.repetition_position_history = (0..history_len as u64).collect();
        board.repetition_position_history.push(current);

        group.throughput(Throughput::Elements(history_len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(history_len),
            &board,
            |b, board| {
                b.iter(|| classify_position(black_box(board), black_box(&legal_moves), false));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classification, bench_repetition_scan);
criterion_main!(benches);
