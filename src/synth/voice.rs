use std::time::Duration;

#[cfg(feature = "rtrb")]
use rtrb::{Producer, RingBuffer};
use tracing::{debug, warn};

use crate::{
    config::SlideToneConfig,
    dsp::{
        envelope::{FadeEnvelope, FadeState},
        position::try_compute_attenuation,
    },
    error::{Result, SlideToneError},
    synth::{
        backend::VoiceBackend,
        message::{ControlRect, MessageReceiver, PointerEvent, SlideMessage},
    },
};

/// A single slide voice: the only owner of the envelope and the position gain.
///
/// Every input arrives as a [`SlideMessage`] and is handled to completion
/// before the next one, so the control values are never touched from two
/// places at once.
pub struct SlideVoice<B: VoiceBackend> {
    envelope: FadeEnvelope,
    position_gain: f32,
    backend: B,
    playback_fault: Option<SlideToneError>,
}

impl<B: VoiceBackend> SlideVoice<B> {
    pub fn new(config: &SlideToneConfig, mut backend: B) -> Result<Self> {
        config.validate()?;
        let envelope = FadeEnvelope::new(config.fade_durations()?);

        let position_gain = 1.0;
        backend.set_fade_gain(envelope.gain());
        backend.set_position_gain(position_gain);

        Ok(Self {
            envelope,
            position_gain,
            backend,
            playback_fault: None,
        })
    }

    pub fn handle(&mut self, msg: SlideMessage) {
        match msg {
            SlideMessage::PointerDown(event) => self.press(event),
            SlideMessage::PointerMove(event) => {
                if self.envelope.is_audible() {
                    if let Err(err) = self.update_position(event) {
                        warn!(error = %err, "ignoring pointer position");
                    }
                }
            }
            SlideMessage::PointerUp | SlideMessage::GlobalPointerUp => self.release(),
            SlideMessage::Tick { elapsed } => self.tick(elapsed),
        }
    }

    /// Handle every queued message in arrival order.
    pub fn drain<R: MessageReceiver>(&mut self, rx: &mut R) {
        while let Some(msg) = rx.pop() {
            self.handle(msg);
        }
    }

    fn press(&mut self, event: PointerEvent) {
        let previous = self.envelope.state();
        self.envelope.press();
        debug!(?previous, gain = self.envelope.gain(), "fade in");

        // A failed start is retried on the next press.
        match self.backend.ensure_playing() {
            Ok(()) => self.playback_fault = None,
            Err(err) => {
                warn!(error = %err, "could not start loop playback");
                self.playback_fault = Some(err);
            }
        }

        // A new gesture never inherits the last one's position.
        if let Err(err) = self.update_position(event) {
            warn!(error = %err, "unusable press position, muting position gain");
            self.set_position_gain(0.0);
        }
    }

    fn release(&mut self) {
        if self.envelope.release() {
            debug!(gain = self.envelope.gain(), "fade out");
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        let previous = self.envelope.state();
        let gain = self.envelope.advance(elapsed.as_secs_f32());
        self.backend.set_fade_gain(gain);

        let state = self.envelope.state();
        if state != previous {
            debug!(?previous, ?state, "fade complete");
        }
    }

    fn update_position(&mut self, event: PointerEvent) -> Result<()> {
        let ControlRect { width, height, .. } = event.bounds;
        let (x, y) = event.bounds.to_local(event.client_x, event.client_y);

        let gain = try_compute_attenuation(x, y, width, height)?;
        self.set_position_gain(gain);
        Ok(())
    }

    fn set_position_gain(&mut self, gain: f32) {
        self.position_gain = gain;
        self.backend.set_position_gain(gain);
    }

    /// Current fade envelope gain (0.0 to 1.0)
    pub fn fade_gain(&self) -> f32 {
        self.envelope.gain()
    }

    /// Current spatial gain (0.0 to 1.0)
    pub fn position_gain(&self) -> f32 {
        self.position_gain
    }

    pub fn state(&self) -> FadeState {
        self.envelope.state()
    }

    pub fn is_audible(&self) -> bool {
        self.envelope.is_audible()
    }

    /// The last playback start failure, cleared by the next successful start.
    pub fn playback_fault(&self) -> Option<&SlideToneError> {
        self.playback_fault.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(feature = "rtrb")]
const VOICE_QUEUE_SIZE: usize = 256;

/// Producer side of a voice's message queue.
#[cfg(feature = "rtrb")]
pub struct SlideVoiceHandle {
    tx: Producer<SlideMessage>,
}

#[cfg(feature = "rtrb")]
impl SlideVoiceHandle {
    pub fn pointer_down(&mut self, client_x: f32, client_y: f32, bounds: ControlRect) {
        self.send(SlideMessage::PointerDown(PointerEvent {
            client_x,
            client_y,
            bounds,
        }));
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, bounds: ControlRect) {
        self.send(SlideMessage::PointerMove(PointerEvent {
            client_x,
            client_y,
            bounds,
        }));
    }

    pub fn pointer_up(&mut self) {
        self.send(SlideMessage::PointerUp);
    }

    pub fn global_pointer_up(&mut self) {
        self.send(SlideMessage::GlobalPointerUp);
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.send(SlideMessage::Tick { elapsed });
    }

    fn send(&mut self, msg: SlideMessage) {
        if self.tx.push(msg).is_err() {
            warn!(?msg, "voice queue full, dropping message");
        }
    }
}

#[cfg(feature = "rtrb")]
impl<B: VoiceBackend> SlideVoice<B> {
    /// Create a voice, the handle that feeds it, and the queue to [`drain`](Self::drain).
    pub fn with_queue(
        config: &SlideToneConfig,
        backend: B,
    ) -> Result<(Self, SlideVoiceHandle, rtrb::Consumer<SlideMessage>)> {
        let voice = Self::new(config, backend)?;
        let (tx, rx) = RingBuffer::<SlideMessage>::new(VOICE_QUEUE_SIZE);
        Ok((voice, SlideVoiceHandle { tx }, rx))
    }
}
