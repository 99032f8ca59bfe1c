//! Throughput benchmarks for legality annotation and full playouts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reversi_engine::{annotate_legal_moves, Board, GameEngine, Player};

fn bench_annotation(c: &mut Criterion) {
    c.bench_function("annotate_start_position", |b| {
        let start = Board::standard_start();
        b.iter(|| {
            let mut board = start.clone();
            black_box(annotate_legal_moves(&mut board, Player::Black))
        })
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("full_playout_first_legal", |b| {
        b.iter(|| {
            let mut engine = GameEngine::headless();
            while !engine.is_finished() {
                let coord = engine.legal_moves()[0];
                engine.request_move(coord.row(), coord.col());
            }
            black_box(engine.score())
        })
    });
}

criterion_group!(benches, bench_annotation, bench_playout);
criterion_main!(benches);
