use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::apply_small_runtime_config;
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use treap::{PrioritySource, RngPriority, SequenceBase, Treap, XorShift64};

const SIZES: [usize; 5] = [1_000, 4_000, 16_000, 64_000, 256_000];
const OPS_PER_SIZE: usize = 100;
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug)]
pub enum Workload {
    Positional,
    Splice,
}

#[derive(Clone, Copy)]
enum Op {
    Get { index: usize },
    Insert { index: usize, value: i64 },
    Remove { index: usize },
    MoveToFront { start: usize, end: usize },
    MoveToBack { start: usize, end: usize },
}

pub fn bench_workload(c: &mut Criterion, workload: Workload) {
    let mut group = c.benchmark_group(format!("treap/{}", workload_label(workload)));

    for &size in &SIZES {
        apply_small_runtime_config(&mut group);
        let base_seed = seed_base(workload, size as u64);
        let mut init_rng = StdRng::seed_from_u64(base_seed);
        let initial = (0..size)
            .map(|_| init_rng.random_range(VALUE_RANGE))
            .collect::<Vec<_>>();

        let xorshift = XorShift64::new(base_seed ^ 0x00C0_FFEE);
        bench_tree(&mut group, "xorshift", xorshift, size, workload, base_seed, &initial);
        let std_rng = RngPriority::<StdRng>::seed_from_u64(base_seed ^ 0x00C0_FFEE);
        bench_tree(&mut group, "std_rng", std_rng, size, workload, base_seed, &initial);
    }

    group.finish();
}

fn random_range<R: Rng + ?Sized>(rng: &mut R, len: usize) -> (usize, usize) {
    let start = rng.random_range(0..len);
    let end = rng.random_range((start + 1)..=len);
    (start, end)
}

fn generate_ops(workload: Workload, size: usize, rng: &mut impl Rng) -> Vec<Op> {
    let mut len = size;
    let mut ops = Vec::with_capacity(OPS_PER_SIZE);

    for step in 0..OPS_PER_SIZE {
        let op = match workload {
            Workload::Positional => {
                let remaining = (OPS_PER_SIZE - step) as isize;
                let drift = len as isize - size as isize;
                let roll = rng.random_range(0..3);
                if len == 0 || drift < -remaining || (roll == 1 && drift <= remaining) {
                    let index = rng.random_range(0..=len);
                    len += 1;
                    Op::Insert {
                        index,
                        value: rng.random_range(VALUE_RANGE),
                    }
                } else if roll == 0 {
                    Op::Get {
                        index: rng.random_range(0..len),
                    }
                } else {
                    let index = rng.random_range(0..len);
                    len -= 1;
                    Op::Remove { index }
                }
            }
            Workload::Splice => {
                let (start, end) = random_range(rng, len);
                if rng.random_bool(0.5) {
                    Op::MoveToFront { start, end }
                } else {
                    Op::MoveToBack { start, end }
                }
            }
        };
        ops.push(op);
    }

    ops
}

fn seed_base(workload: Workload, size: u64) -> u64 {
    let id = match workload {
        Workload::Positional => 1_u64,
        Workload::Splice => 2,
    };
    let seed = 0x5EED_2026 ^ size.wrapping_mul(SEED_MIX);
    mix_seed(seed ^ id.wrapping_mul(SEED_MIX.rotate_left(31)))
}

fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn bench_tree<S, M>(
    group: &mut BenchmarkGroup<'_, M>,
    label: &str,
    source: S,
    size: usize,
    workload: Workload,
    base_seed: u64,
    initial: &[i64],
) where
    S: PrioritySource,
    M: Measurement<Value = Duration>,
{
    let mut tree = Treap::with_source(source);
    tree.extend(initial.iter().copied());

    group.bench_function(BenchmarkId::new(label, size), |bencher| {
        bencher.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            // Reuse the same tree; regenerate ops per iteration from a fixed seed.
            for iter in 0..iters {
                let mut op_rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                let ops = generate_ops(workload, tree.len(), &mut op_rng);
                let start = Instant::now();
                run_ops(&mut tree, &ops);
                black_box(tree.len());
                total += start.elapsed();
            }
            total
        })
    });
}

fn run_ops<S: PrioritySource>(tree: &mut Treap<i64, S>, ops: &[Op]) {
    for &op in ops {
        match op {
            Op::Get { index } => {
                if let Some(value) = tree.get_at(index) {
                    black_box(*value);
                }
            }
            Op::Insert { index, value } => tree.insert_at(index, value),
            Op::Remove { index } => {
                black_box(tree.remove_at(index));
            }
            Op::MoveToFront { start, end } => {
                black_box(tree.move_to_front(start..end));
            }
            Op::MoveToBack { start, end } => {
                black_box(tree.move_to_back(start..end));
            }
        }
    }
}

fn workload_label(workload: Workload) -> &'static str {
    match workload {
        Workload::Positional => "positional",
        Workload::Splice => "splice",
    }
}
