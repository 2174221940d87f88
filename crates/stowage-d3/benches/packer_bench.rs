//! Benchmarks for the 3D container-loading engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stowage_core::Quantity;
use stowage_d3::{BoxType, Container, Packer3D};

fn packer_benchmark(c: &mut Criterion) {
    let types = vec![
        BoxType::new(50.0, 50.0, 50.0).with_quantity(Quantity::Limited(20)),
        BoxType::new(30.0, 30.0, 30.0).with_quantity(Quantity::Unlimited),
    ];
    let container = Container::new(400.0, 200.0, 200.0);
    let packer = Packer3D::default_config();

    c.bench_function("pack_mixed_types", |b| {
        b.iter(|| {
            let result = packer.pack(black_box(&types), black_box(&container));
            black_box(result)
        })
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
