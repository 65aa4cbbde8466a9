use crate::{
    error::Result,
    graph::{GainParam, GainStage, LoopPlayer, NodeExt, PlaybackHandle},
};

/// The audio engine as seen by a [`SlideVoice`](crate::synth::voice::SlideVoice).
///
/// Two gain parameters in series and a start-once playback primitive. Setting
/// a gain must not block. `ensure_playing` may hand the actual start off to
/// another thread and return before it completes; calling it again once
/// playback is running must be a no-op.
pub trait VoiceBackend {
    fn set_position_gain(&mut self, gain: f32);

    fn set_fade_gain(&mut self, gain: f32);

    fn ensure_playing(&mut self) -> Result<()>;
}

impl<B: VoiceBackend + ?Sized> VoiceBackend for Box<B> {
    fn set_position_gain(&mut self, gain: f32) {
        (**self).set_position_gain(gain)
    }

    fn set_fade_gain(&mut self, gain: f32) {
        (**self).set_fade_gain(gain)
    }

    fn ensure_playing(&mut self) -> Result<()> {
        (**self).ensure_playing()
    }
}

/// Loop player → fade stage → position stage.
pub type SlideGraph = GainStage<GainStage<LoopPlayer>>;

/// Drives a [`SlideGraph`] from the control side.
#[derive(Clone, Debug)]
pub struct GraphBackend {
    fade: GainParam,
    position: GainParam,
    playback: PlaybackHandle,
}

impl GraphBackend {
    pub fn fade(&self) -> &GainParam {
        &self.fade
    }

    pub fn position(&self) -> &GainParam {
        &self.position
    }

    pub fn playback(&self) -> &PlaybackHandle {
        &self.playback
    }
}

impl VoiceBackend for GraphBackend {
    fn set_position_gain(&mut self, gain: f32) {
        self.position.set(gain);
    }

    fn set_fade_gain(&mut self, gain: f32) {
        self.fade.set(gain);
    }

    fn ensure_playing(&mut self) -> Result<()> {
        self.playback.start();
        Ok(())
    }
}

/// Wire `player` into a slide graph, silent and unstarted.
pub fn slide_graph(player: LoopPlayer) -> (SlideGraph, GraphBackend) {
    let fade = GainParam::new(0.0);
    let position = GainParam::new(1.0);
    let playback = player.playback();

    let graph = player.gain(fade.clone()).gain(position.clone());
    let backend = GraphBackend {
        fade,
        position,
        playback,
    };

    (graph, backend)
}
