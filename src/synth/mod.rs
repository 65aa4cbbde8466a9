// Purpose: Pointer/clock event handling for a single slide voice
// This layer owns the control state and pushes it into the audio backend

pub mod backend;
pub mod message;
pub mod voice;

pub use backend::{slide_graph, GraphBackend, SlideGraph, VoiceBackend};
pub use message::{ControlRect, MessageReceiver, PointerEvent, SlideMessage};
#[cfg(feature = "rtrb")]
pub use voice::SlideVoiceHandle;
pub use voice::SlideVoice;
