//! Control-rate primitives of a slide voice.
//!
//! Nothing in here allocates or touches the audio device. The envelope and the
//! position mapping produce plain `f32` gains; the graph layer applies them.

/// Constant and ramped gain multiplication.
pub mod amplify;
/// Press/release fade envelope advanced by a frame clock.
pub mod envelope;
/// Pointer distance from center as a normalized gain.
pub mod position;

pub use envelope::{FadeDurations, FadeEnvelope, FadeState};
pub use position::{compute_attenuation, try_compute_attenuation};
