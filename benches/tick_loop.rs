//! benches/tick_loop.rs
//! Run with:  cargo bench --bench tick_loop
//! HTML:      target/criterion/report/index.html

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use chrono::{NaiveDate, NaiveDateTime};
use portfolio_simulator::{Simulation, TradingWindow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use std::io;

fn session_start(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Build a seeded simulation so every iteration prices the same assets.
fn seeded_simulation() -> Simulation<StdRng> {
    Simulation::new(TradingWindow::default(), StdRng::seed_from_u64(42))
}

pub fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    // One tick across the whole portfolio.
    group.bench_function(BenchmarkId::from_parameter("single_tick"), |b| {
        b.iter_batched(
            seeded_simulation,
            |mut sim| {
                sim.tick(black_box(&mut io::sink())).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    // A full trading day: open-to-close at one tick per 15 minutes.
    group.bench_function(BenchmarkId::from_parameter("full_day"), |b| {
        b.iter_batched(
            seeded_simulation,
            |mut sim| {
                sim.run(black_box(session_start(9)), &mut io::sink()).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
