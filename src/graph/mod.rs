//! The audio side of a slide voice.
//!
//! A slide voice needs exactly one small graph: a looping sample followed by
//! two gain stages in series. The `extensions` module adds a fluent `.gain()`
//! so the chain reads in signal order.

/// Fluent combinators (`.gain()`).
pub mod extensions;
/// Shared gain parameter and the stage that applies it.
pub mod gain;
/// Looping playback of an in-memory buffer.
pub mod looper;
/// Core traits shared by all graph nodes.
pub mod node;

pub use extensions::NodeExt;
pub use gain::{GainParam, GainStage};
pub use looper::{LoopPlayer, PlaybackHandle};
pub use node::GraphNode;
