use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rail_core::{criterion::Criterion as Optimize, search::find_route, util::test_graphs};

criterion_group!(benches, route_search);
criterion_main!(benches);

pub fn route_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_search");

    for size in [8usize, 16, 32, 64] {
        let network = test_graphs::generate_grid_network(size, size);
        let target = format!("{},{}", size - 1, size - 1);

        for optimize in [Optimize::Cost, Optimize::Time] {
            group.bench_with_input(
                BenchmarkId::new(optimize.key(), size),
                &network,
                |b, network| {
                    b.iter(|| find_route(black_box(network), "0,0", &target, optimize));
                },
            );
        }
    }
    group.finish();
}
