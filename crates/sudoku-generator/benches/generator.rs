//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation process (scrambling plus clue removal)
//! with the full technique set and with a reduced one. Fixed seeds keep the
//! runs reproducible while covering multiple cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sudoku_generator::{PuzzleGenerator, PuzzleSeed};
use sudoku_solver::{
    TechniqueSolver,
    technique::{LastCell, NakedSingle},
};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_all_techniques(c: &mut Criterion) {
    let solver = TechniqueSolver::with_all_techniques();
    let generator = PuzzleGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_all_techniques", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_reduced_techniques(c: &mut Criterion) {
    let solver = TechniqueSolver::new(vec![
        Box::new(LastCell::new()),
        Box::new(NakedSingle::new()),
    ]);
    let generator = PuzzleGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_reduced_techniques", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generate_all_techniques, bench_generate_reduced_techniques
);
criterion_main!(benches);
