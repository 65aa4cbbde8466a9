//! Error type shared by configuration, geometry and playback.

/// Everything that can go wrong around a slide voice.
///
/// Configuration errors are returned at construction time. Geometry and
/// playback errors are reported to the caller (and logged by the voice) but
/// never interrupt the envelope.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlideToneError {
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: f32 },

    #[error("invalid control area geometry: {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },

    #[error("audio backend failure: {0}")]
    ExternalResource(String),
}

pub type Result<T, E = SlideToneError> = std::result::Result<T, E>;
