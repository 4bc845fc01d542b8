use criterion::{criterion_group, criterion_main, Criterion};
use matchboard::catalog::TokenCatalog;
use matchboard::core_types::CellId;
use matchboard::engine::BoardEngine;
use matchboard::layout::GridLayout;
use std::hint::black_box;

/// Fills a 10x10 board with matching pairs, then rewinds everything.
fn churn(pairs: u16) -> BoardEngine {
    let mut engine = BoardEngine::new(TokenCatalog::builtin(), GridLayout::clamped(10, 10));
    for i in 0..pairs {
        engine.place(CellId(i * 2), "wine");
        engine.place(CellId(i * 2 + 1), "wine");
    }
    while engine.can_undo() {
        engine.undo();
    }
    engine
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("place_pair_undo (50 pairs)", |b| {
        b.iter(|| churn(black_box(50)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
