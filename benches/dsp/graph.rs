//! Benchmarks for the loop player and its two gain stages.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use slide_tone::{
    graph::{GraphNode, LoopPlayer},
    synth::{slide_graph, VoiceBackend},
};

use crate::BLOCK_SIZES;

pub fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/graph");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let samples: Vec<f32> = (0..(sample_rate as usize * 2))
            .map(|i| (i as f32 * 0.01).sin())
            .collect();
        let player = LoopPlayer::new(samples, sample_rate, 0.5, 1.5);
        let (mut graph, mut backend) = slide_graph(player);
        backend.ensure_playing().unwrap();

        let mut buffer = vec![0.0f32; size];
        let mut flip = false;
        group.bench_with_input(BenchmarkId::new("slide_graph", size), &size, |b, _| {
            b.iter(|| {
                // Moving gains keep both stages ramping
                flip = !flip;
                backend.set_fade_gain(if flip { 0.9 } else { 0.7 });
                backend.set_position_gain(if flip { 0.3 } else { 0.6 });
                graph.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
