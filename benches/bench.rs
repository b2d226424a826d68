use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;

use slice_alg::patterns;

#[inline(never)]
fn bench_alg(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
    bench_name: &str,
    prepare: fn(Vec<i32>) -> Vec<i32>,
    mut alg_func: impl FnMut(&mut [i32]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || prepare(pattern_provider(test_size)),
            |mut test_data| alg_func(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn as_is(v: Vec<i32>) -> Vec<i32> {
    v
}

fn pre_sorted(mut v: Vec<i32>) -> Vec<i32> {
    // unique scans a sorted slice, the sort is setup and not measured.
    v.sort();
    v
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            if size > 3 {
                patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
            } else {
                Vec::new()
            }
        }),
        ("random_binary", |size| {
            patterns::random_uniform(size, 0..=1 as i32)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("ascending_dupes", |size| {
            patterns::ascending_dupes(size, 64)
        }),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        bench_alg(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "unique",
            pre_sorted,
            |v| {
                black_box(slice_alg::unique_by(v, |a, b| a.cmp(b)));
            },
        );

        bench_alg(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "heapify",
            as_is,
            |v| slice_alg::heapify_by(v, |a, b| a.cmp(b)),
        );

        let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());
        bench_alg(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "shuffle",
            as_is,
            move |v| slice_alg::shuffle(v, &mut rng),
        );

        bench_alg(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "reverse",
            as_is,
            |v| slice_alg::reverse(v),
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 7, 8, 9, 11, 13, 15, 16, 17, 19, 20, 24, 28, 31, 36, 50, 101, 200, 500,
        1_000, 2_048, 10_000, 100_000, 1_000_000,
    ];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_size in test_sizes {
        bench_patterns(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
