// benches/rankings.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use grip_stats::app::services::stats_engine::{competition_rank, top_n_with_ties};

fn synthetic_field(drivers: usize) -> Vec<u32> {
    // Deterministic spread of values with plenty of ties
    (0..drivers).map(|i| ((i * 7) % 50) as u32).collect()
}

fn bench_competition_rank(c: &mut Criterion) {
    let field = synthetic_field(1_000);

    c.bench_function("competition_rank_1k", |b| {
        b.iter(|| {
            let rank = competition_rank(black_box(25), field.iter().copied());
            black_box(rank)
        })
    });
}

fn bench_top_n_with_ties(c: &mut Criterion) {
    let entries: Vec<(usize, u32)> = synthetic_field(1_000)
        .into_iter()
        .enumerate()
        .collect();

    c.bench_function("top_10_with_ties_1k", |b| {
        b.iter(|| {
            let table = top_n_with_ties(black_box(entries.clone()), Some(10));
            black_box(table.len())
        })
    });
}

criterion_group!(benches, bench_competition_rank, bench_top_n_with_ties);
criterion_main!(benches);
