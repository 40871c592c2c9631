//! Criterion comparison of the three loop orders on fixed operands.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use loopbench::kernels::LoopOrder;
use loopbench::matrix::{Dims, Matrix};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_loop_orders(cr: &mut Criterion) {
    let mut group = cr.benchmark_group("loop_order");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for size in [64, 128, 256] {
        let dims = Dims::square(size).unwrap();
        let a = Matrix::random(size, size, &mut rng).unwrap();
        let b = Matrix::random(size, size, &mut rng).unwrap();
        let mut c = Matrix::zeros(size, size).unwrap();
        group.throughput(Throughput::Elements(dims.flops() as u64));

        for order in LoopOrder::ALL {
            group.bench_with_input(BenchmarkId::new(order.name(), size), &size, |bencher, _| {
                bencher.iter(|| {
                    c.zero();
                    order.multiply(black_box(&a), black_box(&b), &mut c);
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_loop_orders);
criterion_main!(benches);
