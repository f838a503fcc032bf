use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qvantum::core::{gates, Layer, Operator, Register, Unitary};

fn bench_layer_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_effective_matrix");
    for n in [2usize, 4, 6, 8] {
        let layer = Layer::new((0..n).map(|_| gates::hadamard())).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &layer, |b, l| {
            b.iter(|| black_box(l.effective_matrix()))
        });
    }
    group.finish();
}

fn bench_layer_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_apply");
    for n in [2usize, 4, 6, 8] {
        let mut ops = vec![gates::hadamard()];
        ops.extend((1..n).map(|_| Operator::default()));
        let layer = Layer::new(ops).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &layer, |b, l| {
            b.iter(|| {
                let mut r = Register::zero(n).unwrap();
                l.apply_to(&mut r).unwrap();
                black_box(r)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layer_matrix, bench_layer_apply);
criterion_main!(benches);
