//! Criterion micro-benchmarks for the buffer allocation paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mrinv_buffer::{ScratchRegion, TypedBuf};
use mrinv_core::Complex128;

const N: usize = 4096;

fn bench_uninit(c: &mut Criterion) {
    c.bench_function("uninit_float64_4096", |b| {
        b.iter(|| TypedBuf::<f64>::uninit(black_box(N)).unwrap());
    });
    c.bench_function("uninit_complex128_4096", |b| {
        b.iter(|| TypedBuf::<Complex128>::uninit(black_box(N)).unwrap());
    });
}

fn bench_zeroed(c: &mut Criterion) {
    c.bench_function("zeroed_float64_4096", |b| {
        b.iter(|| TypedBuf::<f64>::zeroed(black_box(N)).unwrap());
    });
}

fn bench_scratch(c: &mut Criterion) {
    let mut scratch = ScratchRegion::<f64>::new(N);
    c.bench_function("scratch_alloc_float64_4096", |b| {
        b.iter(|| {
            let s = scratch.alloc(black_box(N)).unwrap();
            black_box(s.len());
            scratch.reset();
        });
    });
}

criterion_group!(benches, bench_uninit, bench_zeroed, bench_scratch);
criterion_main!(benches);
