//! slide-tone - Terminal slide voice
//!
//! Run with: cargo run
//!
//! Press the left mouse button on the pad and drag. The closer to a corner,
//! the louder; releasing fades the loop out.

mod app;
mod ui;

use app::SlideTone;
use slide_tone::SlideToneConfig;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they can be redirected away from the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SlideToneConfig::new("synth:pad").with_fades(0.5, 1.0);

    SlideTone::new(config).run()
}
