use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::graph::node::GraphNode;

/*
Looping Sample Playback
=======================

The slide voice's source is a sample that plays once from the top, then
repeats a region in the middle forever:

    0        loop_start                 loop_end      len
    |-----------|==========================|-----------|
    ──────────────────────────────────────→┐
                ↑                          │
                └──────────────────────────┘

The tail after loop_end is never heard. Loop points are given in seconds and
converted to frames with the buffer's own sample rate.

Edge cases:
  - loop_end past the end of the buffer clamps to the buffer length
  - an empty region (loop_start >= loop_end after clamping) loops everything
  - an empty buffer renders silence

Playback is gated by a `PlaybackHandle`. Until someone starts it the player
outputs silence and does not advance. Starting is one-way: nothing in a
slide voice ever stops the loop, it only fades the gain to zero.
*/

/// Shared start flag for a [`LoopPlayer`].
#[derive(Clone, Debug, Default)]
pub struct PlaybackHandle {
    started: Arc<AtomicBool>,
}

impl PlaybackHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playback. Returns true only for the call that actually started it.
    pub fn start(&self) -> bool {
        let started = !self.started.swap(true, Ordering::AcqRel);
        if started {
            info!("loop playback started");
        }
        started
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}

pub struct LoopPlayer {
    samples: Vec<f32>,
    loop_start: usize,
    loop_end: usize,
    position: usize,
    playback: PlaybackHandle,
}

impl LoopPlayer {
    /// Create a player over a mono buffer recorded at `sample_rate`.
    pub fn new(samples: Vec<f32>, sample_rate: f32, loop_start: f32, loop_end: f32) -> Self {
        let len = samples.len();
        let to_frame = |seconds: f32| ((seconds.max(0.0) * sample_rate) as usize).min(len);

        let (mut start, mut end) = (to_frame(loop_start), to_frame(loop_end));
        if start >= end {
            start = 0;
            end = len;
        }

        Self {
            samples,
            loop_start: start,
            loop_end: end,
            position: 0,
            playback: PlaybackHandle::new(),
        }
    }

    pub fn playback(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    /// Loop region in frames.
    pub fn loop_region(&self) -> (usize, usize) {
        (self.loop_start, self.loop_end)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl GraphNode for LoopPlayer {
    fn render_block(&mut self, out: &mut [f32]) {
        if !self.playback.is_started() || self.samples.is_empty() {
            out.fill(0.0);
            return;
        }

        let mut written = 0;
        while written < out.len() {
            if self.position >= self.loop_end {
                self.position = self.loop_start;
            }

            let available = self.loop_end - self.position;
            let count = available.min(out.len() - written);
            out[written..written + count]
                .copy_from_slice(&self.samples[self.position..self.position + count]);

            self.position += count;
            written += count;
        }
    }

    fn is_active(&self) -> bool {
        self.playback.is_started()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|i| i as f32).collect()
    }

    #[test]
    fn silent_until_started() {
        let mut player = LoopPlayer::new(ramp(8), 1.0, 2.0, 6.0);
        let mut buffer = [1.0; 4];
        player.render_block(&mut buffer);

        assert_eq!(buffer, [0.0; 4]);
        assert_eq!(player.position(), 0);
        assert!(!player.is_active());
    }

    #[test]
    fn start_is_idempotent() {
        let player = LoopPlayer::new(ramp(8), 1.0, 2.0, 6.0);
        let handle = player.playback();

        assert!(handle.start());
        assert!(!handle.start());
        assert!(handle.is_started());
        assert!(player.is_active());
    }

    #[test]
    fn plays_intro_then_loops_region() {
        let mut player = LoopPlayer::new(ramp(8), 1.0, 2.0, 6.0);
        player.playback().start();

        let mut buffer = [0.0; 10];
        player.render_block(&mut buffer);
        assert_eq!(buffer, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0]);

        let mut buffer = [0.0; 3];
        player.render_block(&mut buffer);
        assert_eq!(buffer, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn loop_points_clamp_to_buffer() {
        let player = LoopPlayer::new(ramp(100), 10.0, 1.5, 8.211);
        assert_eq!(player.loop_region(), (15, 82));

        let player = LoopPlayer::new(ramp(50), 10.0, 1.5, 8.211);
        assert_eq!(player.loop_region(), (15, 50));

        let player = LoopPlayer::new(ramp(10), 10.0, 3.0, 8.0);
        assert_eq!(player.loop_region(), (0, 10));
    }

    #[test]
    fn empty_buffer_renders_silence() {
        let mut player = LoopPlayer::new(Vec::new(), 48_000.0, 0.0, 1.0);
        player.playback().start();
        let mut buffer = [1.0; 16];
        player.render_block(&mut buffer);
        assert_eq!(buffer, [0.0; 16]);
    }
}
