//! Benchmarks for pointer position mapping.

use std::hint::black_box;

use criterion::Criterion;
use slide_tone::dsp::position::compute_attenuation;

pub fn bench_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/position");

    // One drag across the pad diagonal
    let points: Vec<(f32, f32)> = (0..256)
        .map(|i| {
            let t = i as f32 / 255.0;
            (t * 320.0, t * 180.0)
        })
        .collect();

    group.bench_function("drag_diagonal", |b| {
        b.iter(|| {
            for &(x, y) in &points {
                black_box(compute_attenuation(black_box(x), black_box(y), 320.0, 180.0));
            }
        })
    });

    group.finish();
}
