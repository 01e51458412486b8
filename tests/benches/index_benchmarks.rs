//! # Bizdex Index Benchmarks
//!
//! | Structure | Operation | Expected |
//! |-----------|-----------|----------|
//! | Intake Queue | enqueue + drain | O(n log n) |
//! | Price Index | range search | O(log n + k) on random input |
//! | Price Index | sorted insert | O(n²), degenerate chain |
//! | Referral Graph | BFS | O(V + E) |
//! | Duplicate Index | has | O(1) |

use bx_02_duplicate_index::DuplicateIndex;
use bx_03_price_index::PriceIndex;
use bx_04_intake_queue::IntakeQueue;
use bx_05_referral_graph::ReferralGraph;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

// ============================================================================
// Intake Queue
// ============================================================================

fn bench_intake_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("bx-04-intake-queue");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = rand::thread_rng();
    for size in [1_000usize, 10_000, 100_000] {
        let priorities: Vec<u32> = (0..size).map(|_| rng.gen_range(1..=100)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("enqueue_then_drain", size),
            &priorities,
            |b, priorities| {
                b.iter(|| {
                    let mut queue = IntakeQueue::with_capacity(priorities.len());
                    for (i, p) in priorities.iter().enumerate() {
                        queue.enqueue(i, *p);
                    }
                    let mut drained = 0usize;
                    while queue.dequeue().is_ok() {
                        drained += 1;
                    }
                    black_box(drained)
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Price Index
// ============================================================================

fn bench_price_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("bx-03-price-index");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = rand::thread_rng();
    for size in [1_000usize, 10_000, 100_000] {
        let mut index = PriceIndex::with_capacity(size);
        for i in 0..size {
            index.insert(rng.gen_range(0.0..10_000.0), i);
        }

        group.bench_with_input(BenchmarkId::new("range_search_10pct", size), &index, |b, index| {
            b.iter(|| black_box(index.range_search(&4_500.0, &5_500.0).len()))
        });
    }

    // Sorted input turns the tree into a chain.
    for size in [1_000u32, 4_000] {
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("sorted_insert", size), &size, |b, &size| {
            b.iter(|| {
                let mut index = PriceIndex::with_capacity(size as usize);
                for i in 0..size {
                    index.insert(f64::from(i), i);
                }
                black_box(index.height())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Referral Graph
// ============================================================================

fn bench_referral_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("bx-05-referral-graph");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = rand::thread_rng();
    for vertices in [1_000u32, 10_000, 50_000] {
        let mut graph = ReferralGraph::new();
        for v in 0..vertices {
            graph.add_vertex(v);
        }
        for _ in 0..vertices * 3 {
            graph.add_edge(rng.gen_range(0..vertices), rng.gen_range(0..vertices));
        }

        group.throughput(Throughput::Elements(u64::from(vertices)));
        group.bench_with_input(BenchmarkId::new("bfs", vertices), &graph, |b, graph| {
            b.iter(|| black_box(graph.bfs(&0).len()))
        });
        group.bench_with_input(BenchmarkId::new("top_referrers_5", vertices), &graph, |b, graph| {
            b.iter(|| black_box(graph.get_top_referrers(5)))
        });
    }

    group.finish();
}

// ============================================================================
// Duplicate Index
// ============================================================================

fn bench_duplicate_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("bx-02-duplicate-index");

    let size = 100_000;
    let index: DuplicateIndex<String, usize> = (0..size)
        .map(|i| (format!("lead{i}@example.com"), i))
        .collect();

    group.bench_function("has_hit", |b| {
        b.iter(|| black_box(index.has("lead51234@example.com")))
    });
    group.bench_function("has_miss", |b| {
        b.iter(|| black_box(index.has("nobody@example.com")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_intake_queue,
    bench_price_index,
    bench_referral_graph,
    bench_duplicate_index
);
criterion_main!(benches);
