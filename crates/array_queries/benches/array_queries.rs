use std::hint::black_box;

use bench::{apply_medium_runtime_config, default_rng};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;

use array_queries::{Problem, Query, QueryKind, solve};

const SIZES: [(usize, usize); 3] = [(1_000, 1_000), (10_000, 10_000), (100_000, 100_000)];

fn random_problem(len: usize, query_count: usize, rng: &mut impl Rng) -> Problem {
    let values = (0..len)
        .map(|_| rng.random_range(1..=1_000_000_000))
        .collect();
    let queries = (0..query_count)
        .map(|_| {
            let start = rng.random_range(1..=len);
            let end = rng.random_range(start..=len);
            let kind = if rng.random_bool(0.5) {
                QueryKind::Front
            } else {
                QueryKind::Back
            };
            Query { kind, start, end }
        })
        .collect();
    Problem { values, queries }
}

fn bench_solve(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("array_queries");
    apply_medium_runtime_config(&mut group);

    for &(len, query_count) in &SIZES {
        let problem = random_problem(len, query_count, &mut rng);
        group.bench_function(BenchmarkId::new("solve", len), |bencher| {
            bencher.iter(|| black_box(solve(black_box(&problem), 1)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
