//! Benchmarks for seminorm evaluation through the lattice operations.
//!
//! Join and sum are a constant number of evaluations per point; the meet
//! runs an infimum search per point, so it is measured separately for the
//! exact line search and the compass search in the plane.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seminorm::geometry::{line_probes, Ball};
use seminorm::{CompassSearch, NestedLineSearch, Seminorm};

type P2 = Seminorm<f64, [f64; 2]>;

fn abs() -> Seminorm<f64, f64> {
    Seminorm::of("|x|", |x: &f64| x.abs())
}

fn l1() -> P2 {
    Seminorm::of("l1", |x: &[f64; 2]| x[0].abs() + x[1].abs())
}

fn linf() -> P2 {
    Seminorm::of("linf", |x: &[f64; 2]| x[0].abs().max(x[1].abs()))
}

// ============================================================================
// Pointwise operations
// ============================================================================

fn bench_pointwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointwise");
    let probes = line_probes(-10.0, 10.0, 0.01);
    group.throughput(Throughput::Elements(probes.len() as u64));

    let join = abs().sup(&abs().smul(2u32));
    let sum = abs().add(&abs().smul(3u32));
    let nested = Seminorm::finset_sup(&(1u32..=16).map(|k| abs().smul(k)).collect::<Vec<_>>());

    for (name, p) in [("join", &join), ("sum", &sum), ("finset_sup_16", &nested)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), p, |b, p| {
            b.iter(|| probes.iter().map(|x| p.apply(black_box(x))).sum::<f64>());
        });
    }
    group.finish();
}

// ============================================================================
// Meet (infimal convolution)
// ============================================================================

fn bench_meet(c: &mut Criterion) {
    let mut group = c.benchmark_group("meet");
    group.throughput(Throughput::Elements(1));

    let line = abs().inf(&abs().smul(2u32));
    group.bench_function("endpoint_line", |b| b.iter(|| line.apply(black_box(&3.5))));

    for tolerance in [1e-6, 1e-9, 1e-12] {
        let search = NestedLineSearch {
            tolerance,
            ..NestedLineSearch::default()
        };
        let plane = l1().inf_with(&linf().smul(2u32), search);
        group.bench_with_input(
            BenchmarkId::new("nested_plane", format!("{tolerance:e}")),
            &plane,
            |b, p| b.iter(|| p.apply(black_box(&[1.5, -0.75]))),
        );
    }

    for max_evaluations in [500usize, 5_000, 20_000] {
        let search = CompassSearch {
            max_evaluations,
            ..CompassSearch::default()
        };
        let plane = l1().inf_with(&linf().smul(2u32), search);
        group.bench_with_input(
            BenchmarkId::new("compass_plane", max_evaluations),
            &plane,
            |b, p| b.iter(|| p.apply(black_box(&[1.5, -0.75]))),
        );
    }
    group.finish();
}

// ============================================================================
// Ball membership
// ============================================================================

fn bench_ball_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("ball_contains");
    let probes = line_probes(-2.0, 2.0, 0.001);
    group.throughput(Throughput::Elements(probes.len() as u64));

    let ball = Ball::new(abs().sup(&abs().smul(2u32)), 0.25, 1.0);
    group.bench_function("join_ball", |b| {
        b.iter(|| probes.iter().filter(|y| ball.contains(black_box(y))).count());
    });
    group.finish();
}

criterion_group!(benches, bench_pointwise, bench_meet, bench_ball_contains);
criterion_main!(benches);
