pub mod config;
pub mod dsp; // Envelope and position mapping
pub mod error;
pub mod graph; // Loop player and gain stages
pub mod synth; // Event handling for a slide voice

pub use config::{SampleSource, SlideToneConfig};
pub use error::{Result, SlideToneError};

pub const MAX_BLOCK_SIZE: usize = 2048;
