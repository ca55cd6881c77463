use criterion::{Criterion, criterion_group, criterion_main};

mod common;

fn bench(c: &mut Criterion) {
    bench_positional(c);
    bench_splice(c);
}

fn bench_positional(c: &mut Criterion) {
    common::bench_workload(c, common::Workload::Positional);
}

fn bench_splice(c: &mut Criterion) {
    common::bench_workload(c, common::Workload::Splice);
}

criterion_group!(benches, bench);
criterion_main!(benches);
