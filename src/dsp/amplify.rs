//! Gain primitives.

/*
Gain Stages
===========

A gain stage multiplies every sample by a factor:

    output[i] = signal[i] × gain

  gain = 1.0  →  unchanged (unity gain)
  gain < 1.0  →  quieter (attenuation)
  gain = 0.0  →  silence

A slide voice runs two of them in series: the fade envelope, then the
spatial attenuation. Their product is the final loudness.


Zipper Noise
------------

The control values only change once per frame (or per pointer event), while
audio is rendered in blocks of hundreds of samples. Jumping from one gain to
the next at a block boundary produces an audible step ("zipper" noise) when
the jump is large, e.g. a fast drag from the center to a corner.

Ramping linearly across the block hides the step:

    gain
    0.8 ┐                 ┌──────
        │           ╱╱╱╱╱╱
    0.2 └──────╱╱╱╱╱
           block n   block n+1

The ramp reaches the target on the block's last sample, so a steady
parameter costs nothing beyond a plain multiply.
*/

/// Multiply a signal by a constant gain factor (in-place).
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// Multiply a signal by a gain that moves linearly from `from` to `to`.
///
/// The first sample is scaled by one step past `from` and the last sample by
/// exactly `to`.
#[inline]
pub fn ramp_gain(signal: &mut [f32], from: f32, to: f32) {
    if from == to {
        apply_gain(signal, to);
        return;
    }

    let len = signal.len();
    if len == 0 {
        return;
    }

    let step = (to - from) / len as f32;
    for (i, sample) in signal.iter_mut().enumerate() {
        let gain = if i + 1 == len {
            to
        } else {
            from + step * (i + 1) as f32
        };
        *sample *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_gain() {
        let mut signal = [1.0, 0.5, -0.5, -1.0];
        apply_gain(&mut signal, 0.5);
        assert_eq!(signal, [0.5, 0.25, -0.25, -0.5]);
    }

    #[test]
    fn test_zero_gain_silences() {
        let mut signal = [0.3, -0.7, 0.5];
        apply_gain(&mut signal, 0.0);
        assert_eq!(signal, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_ramp_gain_ends_on_target() {
        let mut signal = [1.0; 4];
        ramp_gain(&mut signal, 0.0, 1.0);
        assert_eq!(signal, [0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_ramp_gain_downwards() {
        let mut signal = [-1.0; 4];
        ramp_gain(&mut signal, 1.0, 0.0);
        assert_eq!(signal, [-0.75, -0.5, -0.25, 0.0]);
    }

    #[test]
    fn test_flat_ramp_is_plain_gain() {
        let mut signal = [0.5, -0.5];
        ramp_gain(&mut signal, 0.5, 0.5);
        assert_eq!(signal, [0.25, -0.25]);
    }

    #[test]
    fn test_ramp_on_empty_block() {
        let mut signal: [f32; 0] = [];
        ramp_gain(&mut signal, 0.0, 1.0);
    }
}
