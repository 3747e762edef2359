//! Benchmarks for the elementwise execution paths.
//!
//! Compares sequential and chunked-parallel execution of tensor addition and
//! the Hadamard product at sizes around and well above the default minimum
//! chunk length.
//!
//! Run with:
//! ```bash
//! cargo bench --bench elementwise
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cxtensor::prelude::*;
use std::hint::black_box;

fn ramp(n: usize) -> Tensor {
    let data = (0..n)
        .map(|i| Complex64::new((i % 251) as f32, (i % 241) as f32))
        .collect();
    Tensor::from_vec(data, &[n]).unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &n in &[1_000usize, 100_000, 1_000_000] {
        let a = ramp(n);
        let b = ramp(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |bench, _| {
            let policy = ExecPolicy::sequential();
            bench.iter(|| black_box(a.add(&b, &policy).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |bench, _| {
            let policy = ExecPolicy::parallel();
            bench.iter(|| black_box(a.add(&b, &policy).unwrap()));
        });
    }

    group.finish();
}

fn bench_hadamard(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard");

    let n = 1_000_000usize;
    let a = ramp(n);
    let b = ramp(n);
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("sequential", |bench| {
        let policy = ExecPolicy::sequential();
        bench.iter(|| black_box(a.hadamard(&b, &policy).unwrap()));
    });

    group.bench_function("parallel", |bench| {
        let policy = ExecPolicy::parallel();
        bench.iter(|| black_box(a.hadamard(&b, &policy).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_hadamard);
criterion_main!(benches);
