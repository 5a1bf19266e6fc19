//! Series evaluation throughput at a representative working precision

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specfun::prelude::*;

type D = Dec<105>;

fn bench_sin(criterion: &mut Criterion) {
    let x = D::from_ratio(345, 100);
    criterion.bench_function("sin_105_digits", |bench| {
        bench.iter(|| black_box(sin(black_box(&x))))
    });
}

fn bench_hyp2f1(criterion: &mut Criterion) {
    let a = D::from_ratio(1, 3);
    let b = D::from_ratio(1, 7);
    let c = D::from_ratio(8, 5);
    let x = D::from_ratio(-3, 5);
    criterion.bench_function("hyp2f1_105_digits", |bench| {
        bench.iter(|| black_box(hyp2f1(black_box(&a), &b, &c, &x)))
    });
}

fn bench_legendre_q(criterion: &mut Criterion) {
    let v = D::from_ratio(1, 3);
    let u = D::from_ratio(1, 7);
    let x = D::from_ratio(789, 1000);
    criterion.bench_function("legendre_q_105_digits", |bench| {
        bench.iter(|| black_box(legendre_q(black_box(&v), &u, &x)))
    });
}

criterion_group!(benches, bench_sin, bench_hyp2f1, bench_legendre_q);
criterion_main!(benches);
