use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::{dsp::amplify, graph::node::GraphNode};

/// A gain value shared between the control side and the audio thread.
///
/// Stored as `f32` bits in an atomic; cloning shares the same value. Values
/// are clamped to [0, 1] on write.
#[derive(Clone, Debug)]
pub struct GainParam {
    bits: Arc<AtomicU32>,
}

impl GainParam {
    pub fn new(value: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(clamp_gain(value).to_bits())),
        }
    }

    pub fn set(&self, value: f32) {
        self.bits
            .store(clamp_gain(value).to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

fn clamp_gain(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Renders its input, then scales it by a [`GainParam`].
///
/// Each block ramps from the gain used at the end of the previous block to
/// the parameter's current value.
pub struct GainStage<N> {
    pub input: N,
    param: GainParam,
    last_gain: f32,
}

impl<N> GainStage<N> {
    pub fn new(input: N, param: GainParam) -> Self {
        let last_gain = param.get();
        Self {
            input,
            param,
            last_gain,
        }
    }

    pub fn param(&self) -> &GainParam {
        &self.param
    }
}

impl<N: GraphNode> GraphNode for GainStage<N> {
    fn render_block(&mut self, out: &mut [f32]) {
        self.input.render_block(out);

        let target = self.param.get();
        amplify::ramp_gain(out, self.last_gain, target);
        self.last_gain = target;
    }

    fn is_active(&self) -> bool {
        self.input.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dc(f32);

    impl GraphNode for Dc {
        fn render_block(&mut self, out: &mut [f32]) {
            out.fill(self.0);
        }
    }

    #[test]
    fn param_clamps_and_shares_value() {
        let param = GainParam::new(2.0);
        assert_eq!(param.get(), 1.0);

        let shared = param.clone();
        shared.set(-1.0);
        assert_eq!(param.get(), 0.0);

        shared.set(f32::NAN);
        assert_eq!(param.get(), 0.0);

        shared.set(0.25);
        assert_eq!(param.get(), 0.25);
    }

    #[test]
    fn steady_param_is_constant_gain() {
        let mut stage = GainStage::new(Dc(1.0), GainParam::new(0.5));
        let mut buffer = [0.0; 8];
        stage.render_block(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.5));
    }

    #[test]
    fn change_is_ramped_across_one_block() {
        let param = GainParam::new(0.0);
        let mut stage = GainStage::new(Dc(1.0), param.clone());
        let mut buffer = [0.0; 4];

        param.set(1.0);
        stage.render_block(&mut buffer);
        assert_eq!(buffer, [0.25, 0.5, 0.75, 1.0]);

        stage.render_block(&mut buffer);
        assert_eq!(buffer, [1.0; 4]);
    }

    #[test]
    fn stages_in_series_multiply() {
        let fade = GainParam::new(0.5);
        let position = GainParam::new(0.5);
        let mut chain = GainStage::new(GainStage::new(Dc(1.0), fade), position);
        let mut buffer = [0.0; 4];
        chain.render_block(&mut buffer);
        assert_eq!(buffer, [0.25; 4]);
    }
}
