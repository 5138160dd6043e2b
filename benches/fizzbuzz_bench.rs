//! Criterion benchmarks for u-fizzbuzz rules.
//!
//! Labels random inputs and contiguous ranges to measure per-number
//! rule overhead for each rule set.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_fizzbuzz::engine::{Engine, RenderConfig};
use u_fizzbuzz::rule_set::RuleSet;

fn random_numbers(n: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.random_range(1..1_000_000_000)).collect()
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let numbers = random_numbers(1_000);

    for rule_set in RuleSet::ALL {
        let engine = Engine::for_rule_set(rule_set);
        group.bench_with_input(
            BenchmarkId::from_parameter(rule_set),
            &numbers,
            |b, numbers| {
                b.iter(|| {
                    for &n in numbers {
                        black_box(engine.text(black_box(n)));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let engine = Engine::for_rule_set(RuleSet::DivisibleOrDigits);
    for &end in &[1_000i64, 100_000] {
        for parallel in [false, true] {
            let config = RenderConfig::default()
                .with_range(1, end)
                .with_parallel(parallel);
            group.bench_with_input(
                BenchmarkId::new(if parallel { "parallel" } else { "sequential" }, end),
                &config,
                |b, config| b.iter(|| black_box(engine.render(black_box(config)))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_text, bench_render);
criterion_main!(benches);
