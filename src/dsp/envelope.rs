use crate::error::{Result, SlideToneError};

/*
Fade Envelope Implementation
============================

This module implements the attack/release envelope of a slide voice. Unlike a
per-sample ADSR, it is advanced once per rendered frame by an external clock,
and the elapsed time between frames drives a linear ramp.

Vocabulary
----------

  gain        The envelope's current output value (0.0 to 1.0). The audio
              graph multiplies the looping sample by this value.

  state       Which phase we're in: Muted, FadeIn, Sustain or FadeOut.

  press       Pointer went down on the control surface. Always starts FadeIn.

  release     Pointer went up (on the surface or anywhere else). Starts
              FadeOut if the voice is sounding.

  elapsed     Seconds since the previous frame. The caller converts whatever
              unit its clock uses before calling `advance`.


The Shape: Duration-Parameterized Ramps
---------------------------------------

  Gain
    1.0 ┐     ┌────────────┐
        │    ╱              ╲
        │   ╱                ╲
        │  ╱                  ╲
    0.0 └─╱────────────────────╲──→ Time
          FadeIn    Sustain   FadeOut

The ramp is expressed as a duration, not a rate:

    step = elapsed / fade_in_duration

so a 0.5 s fade takes 0.5 s whether the frame clock runs at 30 or 144 Hz.


The State Machine
-----------------

    ┌──────┐   press   ┌────────┐  gain=1  ┌─────────┐
    │Muted │ ────────→ │ FadeIn │ ───────→ │ Sustain │
    └──────┘           └────────┘          └─────────┘
        ↑                 ↑  │ release          │ release
        │                 │  ↓                  ↓
        │   gain=0      ┌──────────┐ ←──────────┘
        └────────────── │ FadeOut  │
                        └──────────┘
                          press → FadeIn (from the current gain)

A press in any state goes to FadeIn and keeps the current gain, so a quick
re-press during FadeOut swells back up without a click.


Implementation Notes
--------------------

The ramp accumulates in f64 and is published as f32. An f32 accumulator
drifts by more than a whole step over a few thousand frames (a 10 s fade at
1 ms per tick); in f64 the drift stays far below `SNAP`, so equal steps finish
in exactly ceil(duration / step) frames. The snap only absorbs the last few
ulps when the steps sum to the duration exactly.

Negative (or NaN) elapsed times are treated as zero: time never runs
backwards for the envelope.
*/

/// Distance from a ramp endpoint at which the ramp is considered complete.
const SNAP: f64 = 1.0e-9;

/// The current phase of the fade envelope.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    Muted,   // Silent, gain pinned to 0
    FadeIn,  // Ramping up towards 1
    Sustain, // Holding at 1 until release
    FadeOut, // Ramping down towards 0
}

/// Fade-in and fade-out times in seconds. Both are finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeDurations {
    fade_in: f32,
    fade_out: f32,
}

impl FadeDurations {
    pub fn new(fade_in: f32, fade_out: f32) -> Result<Self> {
        Ok(Self {
            fade_in: positive_seconds("fade_in", fade_in)?,
            fade_out: positive_seconds("fade_out", fade_out)?,
        })
    }

    pub fn fade_in(&self) -> f32 {
        self.fade_in
    }

    pub fn fade_out(&self) -> f32 {
        self.fade_out
    }
}

fn positive_seconds(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SlideToneError::InvalidConfiguration { field, value })
    }
}

/// Press/release fade envelope, advanced once per frame by [`advance`](Self::advance).
pub struct FadeEnvelope {
    durations: FadeDurations,
    state: FadeState,
    gain: f64,
}

impl FadeEnvelope {
    pub fn new(durations: FadeDurations) -> Self {
        Self {
            durations,
            state: FadeState::Muted,
            gain: 0.0,
        }
    }

    /// Pointer down: start (or resume) the fade in from the current gain.
    pub fn press(&mut self) {
        self.state = FadeState::FadeIn;
    }

    /// Pointer up: fade out if the voice is sounding.
    ///
    /// Returns true if this call started the fade out.
    pub fn release(&mut self) -> bool {
        match self.state {
            FadeState::FadeIn | FadeState::Sustain => {
                self.state = FadeState::FadeOut;
                true
            }
            FadeState::Muted | FadeState::FadeOut => false,
        }
    }

    /// Advance the ramp by `elapsed` seconds and return the current gain.
    pub fn advance(&mut self, elapsed: f32) -> f32 {
        // NaN.max(0.0) is 0.0
        let elapsed = f64::from(elapsed.max(0.0));

        match self.state {
            FadeState::FadeIn => {
                self.gain += elapsed / f64::from(self.durations.fade_in);
                if self.gain >= 1.0 - SNAP {
                    self.gain = 1.0;
                    self.state = FadeState::Sustain;
                }
            }
            FadeState::FadeOut => {
                self.gain -= elapsed / f64::from(self.durations.fade_out);
                if self.gain <= SNAP {
                    self.gain = 0.0;
                    self.state = FadeState::Muted;
                }
            }
            FadeState::Muted | FadeState::Sustain => {}
        }

        debug_assert!((0.0..=1.0).contains(&self.gain));
        self.gain()
    }

    /// Current envelope gain (0.0 to 1.0)
    pub fn gain(&self) -> f32 {
        self.gain as f32
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    /// True in every state except Muted.
    pub fn is_audible(&self) -> bool {
        self.state != FadeState::Muted
    }
}
