//! Feature extraction throughput benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::FeatureExtractor;
use ndarray::Array2;
use std::f64::consts::PI;

fn bench_extract(c: &mut Criterion) {
    let fs = 256.0;
    let samples = (60.0 * fs) as usize;
    let window = Array2::from_shape_fn((8, samples), |(ch, i)| {
        (2.0 * PI * (6.0 + ch as f64) * i as f64 / fs).sin()
    });

    c.bench_function("extract_8ch_60s_256hz", |b| {
        let mut extractor = FeatureExtractor::new(fs, samples, samples);
        b.iter(|| extractor.extract(black_box(window.view())).unwrap());
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
