#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::envelope::FadeDurations,
    error::{Result, SlideToneError},
};

/// Opaque reference to the audio content a voice loops.
///
/// The crate never decodes it; the backend decides what it points at.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleSource(pub String);

impl From<&str> for SampleSource {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Construction-time settings of a slide voice. All times in seconds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SlideToneConfig {
    pub fade_in: f32,
    pub fade_out: f32,
    pub sample: SampleSource,
    pub loop_start: f32,
    pub loop_end: f32,
}

impl Default for SlideToneConfig {
    fn default() -> Self {
        Self {
            fade_in: 0.5,
            fade_out: 1.0,
            sample: SampleSource::default(),
            loop_start: 1.5,
            loop_end: 8.211,
        }
    }
}

impl SlideToneConfig {
    pub fn new(sample: impl Into<SampleSource>) -> Self {
        Self {
            sample: sample.into(),
            ..Self::default()
        }
    }

    pub fn with_fades(mut self, fade_in: f32, fade_out: f32) -> Self {
        self.fade_in = fade_in;
        self.fade_out = fade_out;
        self
    }

    pub fn with_loop(mut self, loop_start: f32, loop_end: f32) -> Self {
        self.loop_start = loop_start;
        self.loop_end = loop_end;
        self
    }

    /// Validated fade durations.
    pub fn fade_durations(&self) -> Result<FadeDurations> {
        FadeDurations::new(self.fade_in, self.fade_out)
    }

    /// Check every field, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        self.fade_durations()?;

        if !(self.loop_start.is_finite() && self.loop_start >= 0.0) {
            return Err(SlideToneError::InvalidConfiguration {
                field: "loop_start",
                value: self.loop_start,
            });
        }
        if !(self.loop_end.is_finite() && self.loop_end > self.loop_start) {
            return Err(SlideToneError::InvalidConfiguration {
                field: "loop_end",
                value: self.loop_end,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SlideToneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.loop_start, config.loop_end), (1.5, 8.211));
    }

    #[test]
    fn builder_sets_fields() {
        let config = SlideToneConfig::new("pad.wav")
            .with_fades(0.2, 0.4)
            .with_loop(0.0, 2.0);

        assert_eq!(config.sample, SampleSource("pad.wav".into()));
        let durations = config.fade_durations().unwrap();
        assert_eq!((durations.fade_in(), durations.fade_out()), (0.2, 0.4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_fades() {
        let err = SlideToneConfig::default()
            .with_fades(0.0, 1.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            SlideToneError::InvalidConfiguration {
                field: "fade_in",
                value: 0.0
            }
        );
    }

    #[test]
    fn rejects_bad_loop_region() {
        let backwards = SlideToneConfig::default().with_loop(4.0, 2.0);
        assert!(matches!(
            backwards.validate(),
            Err(SlideToneError::InvalidConfiguration { field: "loop_end", .. })
        ));

        let negative = SlideToneConfig::default().with_loop(-1.0, 2.0);
        assert!(matches!(
            negative.validate(),
            Err(SlideToneError::InvalidConfiguration { field: "loop_start", .. })
        ));
    }
}
