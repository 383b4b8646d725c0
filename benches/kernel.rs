//! Benchmarks for the polygon kernel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use polyshard::polygon::{closest_edge, contains_point, raycast, slice, triangulate};
use polyshard::{Point2, Vec2};

/// Star polygon with `points` spikes, concave for ear clipping.
fn star(points: usize) -> Vec<Point2<f64>> {
    let n = points * 2;
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let radius = if i % 2 == 0 { 10.0 } else { 4.0 };
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Generates random query points.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 24.0 - 12.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 24.0 - 12.0;

        points.push(Point2::new(x, y));
    }

    points
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for spikes in [5, 20, 100, 250] {
        let polygon = star(spikes);
        group.throughput(Throughput::Elements(polygon.len() as u64));

        group.bench_with_input(BenchmarkId::new("star", spikes), &polygon, |b, poly| {
            b.iter(|| triangulate(black_box(poly)))
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let polygon = star(50);
    let queries = generate_random_points(1000, 12345);
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("contains_point", |b| {
        b.iter(|| {
            queries
                .iter()
                .filter(|&&q| contains_point(black_box(&polygon), q))
                .count()
        })
    });

    group.bench_function("closest_edge", |b| {
        b.iter(|| {
            for &q in &queries {
                let _ = closest_edge(black_box(&polygon), q);
            }
        })
    });

    group.bench_function("raycast", |b| {
        b.iter(|| {
            for &q in &queries {
                let _ = raycast(black_box(&polygon), q, Vec2::new(30.0, 7.0));
            }
        })
    });

    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");

    for spikes in [5, 20, 100] {
        let polygon = star(spikes);
        // Horizontal cut slightly off the spike axis so it never grazes a vertex.
        let p1 = Point2::new(-20.0, 0.37);
        let p2 = Point2::new(20.0, 0.37);

        group.bench_with_input(BenchmarkId::new("star", spikes), &polygon, |b, poly| {
            b.iter(|| slice(black_box(poly), p1, p2))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_triangulate, bench_queries, bench_slice);
criterion_main!(benches);
