//! Benchmarks for expression lowering.
//!
//! Measures `trees` / `subtrees` over synthetic expressions of growing
//! size, with and without a warm manager.
//!
//! Run with:
//! ```bash
//! cargo bench --bench lowering
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zdd_forest::expr::TreeExpr;
use zdd_forest::zdd::ZddManager;

/// A balanced forest: `width` trees of `depth` chained edges each,
/// sharing a small symbol alphabet so paths overlap.
fn synthetic_forest(width: usize, depth: usize) -> TreeExpr {
    let symbols = ["a", "b", "c", "d", "e", "f", "g", "h"];
    TreeExpr::sum((0..width).map(|i| {
        let path: Vec<&str> = (0..depth).map(|d| symbols[(i + d) % symbols.len()]).collect();
        TreeExpr::branch(path)
    }))
}

/// A bushy tree: products of sums, nested `depth` levels deep.
fn bushy(depth: usize) -> TreeExpr {
    if depth == 0 {
        return TreeExpr::Top;
    }
    TreeExpr::product([
        TreeExpr::prefix("l", bushy(depth - 1)),
        TreeExpr::sum([TreeExpr::prefix("r", bushy(depth - 1)), TreeExpr::branch(["x"])]),
    ])
}

fn bench_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower/trees");

    for width in [16, 64, 256] {
        let t = synthetic_forest(width, 8);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &t, |b, t| {
            b.iter(|| {
                let mgr = ZddManager::new();
                mgr.trees(t)
            });
        });
    }

    group.finish();
}

fn bench_subtrees(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower/subtrees");

    for depth in [4, 6, 8] {
        let t = bushy(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &t, |b, t| {
            b.iter(|| {
                let mgr = ZddManager::new();
                mgr.subtrees(t)
            });
        });
    }

    group.finish();
}

fn bench_warm_manager(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower/warm");

    let t = synthetic_forest(128, 8);
    group.bench_function("cold", |b| {
        b.iter(|| {
            let mgr = ZddManager::new();
            mgr.trees(&t)
        });
    });
    group.bench_function("warm", |b| {
        let mgr = ZddManager::new();
        mgr.trees(&t);
        b.iter(|| mgr.trees(&t));
    });

    group.finish();
}

criterion_group!(benches, bench_trees, bench_subtrees, bench_warm_manager);
criterion_main!(benches);
