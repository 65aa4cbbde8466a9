//! SlideTone - audio setup and the device-backed voice backend

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use std::f32::consts::TAU;
use tracing::error;

use slide_tone::{
    graph::{GraphNode, LoopPlayer},
    synth::{slide_graph, GraphBackend, SlideVoice, VoiceBackend},
    SlideToneConfig, SlideToneError, MAX_BLOCK_SIZE,
};

use super::ui::UiApp;

/// Length of the generated source material in seconds.
const PAD_SECONDS: f32 = 10.0;

/// Main application
pub struct SlideTone {
    config: SlideToneConfig,
}

impl SlideTone {
    pub fn new(config: SlideToneConfig) -> Self {
        Self { config }
    }

    /// Run the application until the user quits
    pub fn run(self) -> EyreResult<()> {
        self.config
            .validate()
            .wrap_err("invalid slide tone configuration")?;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let player = LoopPlayer::new(
            synthesize_pad(sample_rate, PAD_SECONDS),
            sample_rate,
            self.config.loop_start,
            self.config.loop_end,
        );
        let (mut graph, graph_backend) = slide_graph(player);

        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];
        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    graph.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| error!(error = %err, "audio stream error"),
            None,
        )?;

        // The stream is started by the first press, not here.
        let backend = DeviceBackend {
            graph: graph_backend,
            stream,
            running: false,
        };
        let (voice, handle, rx) = SlideVoice::with_queue(&self.config, backend)?;

        let mut terminal = ratatui::init();
        let result = execute!(std::io::stdout(), EnableMouseCapture)
            .map_err(Into::into)
            .and_then(|()| {
                UiApp::new(voice, handle, rx, self.config.sample.0.clone()).run(&mut terminal)
            });

        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }
}

/// Output device plus the graph it renders.
pub struct DeviceBackend {
    graph: GraphBackend,
    stream: cpal::Stream,
    running: bool,
}

impl VoiceBackend for DeviceBackend {
    fn set_position_gain(&mut self, gain: f32) {
        self.graph.set_position_gain(gain);
    }

    fn set_fade_gain(&mut self, gain: f32) {
        self.graph.set_fade_gain(gain);
    }

    fn ensure_playing(&mut self) -> slide_tone::Result<()> {
        if !self.running {
            self.stream
                .play()
                .map_err(|err| SlideToneError::ExternalResource(err.to_string()))?;
            self.running = true;
        }
        self.graph.ensure_playing()
    }
}

/// A slowly beating A minor triad, standing in for a decoded sample.
fn synthesize_pad(sample_rate: f32, seconds: f32) -> Vec<f32> {
    const PARTIALS: [(f32, f32); 6] = [
        (220.0, 0.30),
        (220.7, 0.20),
        (261.63, 0.20),
        (262.4, 0.15),
        (329.63, 0.20),
        (330.5, 0.15),
    ];

    let frames = (sample_rate * seconds) as usize;
    let norm: f32 = PARTIALS.iter().map(|&(_, amp)| amp).sum();

    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate;
            let sum: f32 = PARTIALS
                .iter()
                .map(|&(freq, amp)| amp * (TAU * freq * t).sin())
                .sum();
            0.5 * sum / norm
        })
        .collect()
}
