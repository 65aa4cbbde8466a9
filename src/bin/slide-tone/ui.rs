//! TUI module for slide-tone
//!
//! The pad is the control surface: mouse press, drag and release over it are
//! forwarded to the voice as pointer events, and every redraw is a clock tick.

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::{Duration, Instant};

use slide_tone::{
    dsp::FadeState,
    synth::{ControlRect, SlideMessage, SlideVoice, SlideVoiceHandle, VoiceBackend},
};

/// Redraw interval (~60fps)
const FRAME: Duration = Duration::from_millis(16);

/// UI application state
pub struct UiApp<B: VoiceBackend> {
    voice: SlideVoice<B>,
    handle: SlideVoiceHandle,
    rx: Consumer<SlideMessage>,
    sample_name: String,
    /// Pad area as laid out in the last frame
    pad: ControlRect,
    last_frame: Instant,
    should_quit: bool,
}

impl<B: VoiceBackend> UiApp<B> {
    pub fn new(
        voice: SlideVoice<B>,
        handle: SlideVoiceHandle,
        rx: Consumer<SlideMessage>,
        sample_name: String,
    ) -> Self {
        Self {
            voice,
            handle,
            rx,
            sample_name,
            pad: ControlRect::new(0.0, 0.0, 0.0, 0.0),
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.handle.tick(now - self.last_frame);
            self.last_frame = now;

            self.voice.drain(&mut self.rx);

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(FRAME)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Aim at the middle of the terminal cell
        let x = mouse.column as f32 + 0.5;
        let y = mouse.row as f32 + 0.5;
        let on_pad = self.pad.contains(x, y);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_pad => {
                self.handle.pointer_down(x, y, self.pad)
            }
            MouseEventKind::Drag(MouseButton::Left) if on_pad => {
                self.handle.pointer_move(x, y, self.pad)
            }
            MouseEventKind::Up(MouseButton::Left) if on_pad => self.handle.pointer_up(),
            MouseEventKind::Up(MouseButton::Left) => self.handle.global_pointer_up(),
            _ => {}
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Length(3), // Gain meters
                Constraint::Min(6),    // Pad
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        self.render_status(frame, chunks[0]);
        self.render_meters(frame, chunks[1]);

        let pad_block = Block::default().title(" Pad ").borders(Borders::ALL);
        let inner = pad_block.inner(chunks[2]);
        frame.render_widget(pad_block, chunks[2]);
        self.pad = ControlRect::new(
            inner.x as f32,
            inner.y as f32,
            inner.width as f32,
            inner.height as f32,
        );

        if inner.height > 0 {
            let center = Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            };
            let marker = Paragraph::new("+")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(marker, center);
        }

        let help = Paragraph::new(" [Mouse] Press and drag on the pad  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" slide-tone ").borders(Borders::ALL);

        let (label, color) = match self.voice.state() {
            FadeState::Muted => ("Muted", Color::DarkGray),
            FadeState::FadeIn => ("Fade in", Color::Yellow),
            FadeState::Sustain => ("Sustain", Color::Green),
            FadeState::FadeOut => ("Fade out", Color::Cyan),
        };
        let audible = if self.voice.is_audible() { "▶" } else { "■" };

        let mut spans = vec![
            Span::styled(format!(" {} {}  ", audible, label), Style::default().fg(color)),
            Span::styled(
                format!("Sample: {}  ", self.sample_name),
                Style::default().fg(Color::White),
            ),
        ];
        if let Some(fault) = self.voice.playback_fault() {
            spans.push(Span::styled(
                format!("{}", fault),
                Style::default().fg(Color::Red),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_meters(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let fade = self.voice.fade_gain();
        let position = self.voice.position_gain();

        let fade_gauge = Gauge::default()
            .block(Block::default().title(" Fade ").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(fade as f64)
            .label(format!("{:.2}", fade));
        let position_gauge = Gauge::default()
            .block(Block::default().title(" Position ").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(position as f64)
            .label(format!("{:.2}", position));

        frame.render_widget(fade_gauge, halves[0]);
        frame.render_widget(position_gauge, halves[1]);
    }
}
