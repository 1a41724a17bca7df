use crate::util::{N_PARTS, create_base_config, create_dense_layout, create_instance};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ffd::opt::ffd_optimizer::FFDOptimizer;
use ffd::opt::search::search;
use sheet_nest::collision_detection::{BBoxOverlap, HullOverlap, OverlapMode};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, search_bench, solve_bench);

mod util;

const TRANSLATION_STEPS: [f64; 3] = [20.0, 10.0, 5.0];

/// Benchmark a single placement search of the smallest item in a dense layout, for different grid resolutions.
fn search_bench(c: &mut Criterion) {
    let config = create_base_config();
    let instance = create_instance();
    let layout = create_dense_layout(&instance, config);
    let item = instance.item(N_PARTS - 1);

    let mut group = c.benchmark_group("search_smallest_item");
    for t in TRANSLATION_STEPS {
        group.bench_function(BenchmarkId::new("bbox", t), |b| {
            b.iter(|| {
                let mut n_candidates = 0;
                let found = search(
                    item,
                    &layout,
                    &BBoxOverlap,
                    config.rotation_step,
                    t,
                    &mut n_candidates,
                );
                black_box((found, n_candidates))
            })
        });
        group.bench_function(BenchmarkId::new("hull", t), |b| {
            b.iter(|| {
                let mut n_candidates = 0;
                let found = search(
                    item,
                    &layout,
                    &HullOverlap,
                    config.rotation_step,
                    t,
                    &mut n_candidates,
                );
                black_box((found, n_candidates))
            })
        });
    }
    group.finish();
}

/// Benchmark a complete nesting run with both overlap tests.
fn solve_bench(c: &mut Criterion) {
    let instance = create_instance();

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    for mode in [OverlapMode::BBox, OverlapMode::Hull] {
        let config = ffd::config::FFDConfig {
            overlap_test: mode,
            ..create_base_config()
        };
        group.bench_function(BenchmarkId::from_parameter(format!("{mode:?}")), |b| {
            b.iter(|| {
                let mut optimizer =
                    FFDOptimizer::new(instance.clone(), config).expect("valid config");
                black_box(optimizer.solve())
            })
        });
    }
    group.finish();
}
