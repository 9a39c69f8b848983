//! Benchmarks for the series summations and full ephemeris construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use precess::{nutationlib, Ephemeris, Epoch};

fn bench_nutation_series(c: &mut Criterion) {
    let jc = 0.165_571_526_351_813_82;

    c.bench_function("lunisolar_series", |b| {
        b.iter(|| nutationlib::lunisolar(black_box(jc)))
    });

    c.bench_function("planetary_series", |b| {
        b.iter(|| nutationlib::planetary(black_box(jc)))
    });

    c.bench_function("nutation_total", |b| {
        b.iter(|| nutationlib::nutation(black_box(jc)))
    });
}

fn bench_ephemeris(c: &mut Criterion) {
    let epoch = Epoch::from_ymd(2016, 7, 23).unwrap();

    c.bench_function("ephemeris_new", |b| {
        b.iter(|| Ephemeris::new(black_box(epoch)))
    });
}

criterion_group!(benches, bench_nutation_series, bench_ephemeris);
criterion_main!(benches);
