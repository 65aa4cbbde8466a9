//! Benchmarks for the fade envelope.

use std::hint::black_box;

use criterion::Criterion;
use slide_tone::dsp::envelope::{FadeDurations, FadeEnvelope};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let durations = FadeDurations::new(0.5, 1.0).unwrap();

    // A full press/hold/release cycle at 60 frames per second
    group.bench_function("gesture_cycle", |b| {
        b.iter(|| {
            let mut env = FadeEnvelope::new(durations);
            env.press();
            for _ in 0..60 {
                black_box(env.advance(black_box(1.0 / 60.0)));
            }
            env.release();
            for _ in 0..90 {
                black_box(env.advance(black_box(1.0 / 60.0)));
            }
        })
    });

    let mut env = FadeEnvelope::new(durations);
    env.press();
    env.advance(1.0);
    group.bench_function("sustain_tick", |b| {
        b.iter(|| black_box(env.advance(black_box(1.0 / 60.0))))
    });

    group.finish();
}
