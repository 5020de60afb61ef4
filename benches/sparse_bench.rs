use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparsevec::SparseVector;

fn bench_sparse_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_vector");

    // 1000 runs of 16 cells, each followed by 16 void cells
    let block: Vec<i64> = (0..16).collect();
    let mut sv: SparseVector<i64> = SparseVector::new();
    for i in 0..1000 {
        sv.add_range(i * 32, &block);
    }

    group.bench_function("get", |b| {
        b.iter(|| {
            let mut acc = 0;
            for i in 0..sv.len() {
                acc += black_box(sv.get(i));
            }
            acc
        })
    });

    group.bench_function("iter_full", |b| {
        b.iter(|| sv.iter().map(|cell| cell.value()).sum::<i64>())
    });

    group.bench_function("iter_ranges", |b| {
        b.iter(|| {
            sv.ranges()
                .map(|r| r.values().iter().sum::<i64>())
                .sum::<i64>()
        })
    });

    group.bench_function("add_range_coalescing", |b| {
        b.iter(|| {
            let mut built: SparseVector<i64> = SparseVector::new();
            for i in 0..256 {
                built.add_range(black_box(i * 8), &block);
            }
            built.n_ranges()
        })
    });

    group.bench_function("combine_range", |b| {
        let input = vec![1i64; 4096];
        b.iter(|| {
            let mut mixed = sv.clone();
            mixed.combine_range(100, &input, |a, b| a + b, 0);
            mixed.count()
        })
    });
}

criterion_group!(benches, bench_sparse_vector);
criterion_main!(benches);
