use classic_dsa::{binary_search, jump_search, List, SortAlgorithm};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed;

fn random_values(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.gen_range(0..len as u32 * 4)).collect()
}

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in [64, 512, 2048] {
        let input = random_values(len);
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut v| algorithm.sort(black_box(&mut v)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mut haystack = random_values(100_000);
    haystack.sort_unstable();
    let needles = random_values(256);

    group.bench_function("binary", |b| {
        b.iter(|| {
            for needle in &needles {
                black_box(binary_search(&haystack, needle));
            }
        })
    });
    group.bench_function("jump", |b| {
        b.iter(|| {
            for needle in &needles {
                black_box(jump_search(&haystack, needle));
            }
        })
    });
    group.finish();
}

fn list_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    for len in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("append_then_drain", len), &len, |b, &len| {
            b.iter(|| {
                let mut list = List::with_capacity(len);
                for i in 0..len {
                    list.append(i);
                }
                while let Some(x) = list.remove_start() {
                    black_box(x);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, sort_benchmark, search_benchmark, list_benchmark);
criterion_main!(benches);
