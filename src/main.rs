//! Terminal starfield runner (default binary).
//!
//! Loads the spaceship frames, takes over the terminal and runs the
//! animation until a quit key is pressed (`q`, `Esc` or `Ctrl-C`).
//!
//! Settings come from `STARFIELD_*` environment variables; see
//! [`SceneConfig::from_env`]. Logs go to `STARFIELD_LOG_PATH` when set,
//! because the terminal itself is occupied by the animation.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;

use starfield::core::{build_scene, Playfield, SceneConfig, Sprite, StopSignal};
use starfield::term::{TerminalDisplay, TerminalRenderer};

fn main() -> Result<()> {
    let config = SceneConfig::from_env();
    init_logging(&config)?;

    // Missing frames are fatal before the terminal is touched.
    let frames = config
        .frame_paths()
        .iter()
        .map(Sprite::load)
        .collect::<Result<Vec<_>, _>>()
        .context("loading spaceship frames")?;

    let stop = StopSignal::new();
    let mut display = TerminalDisplay::new(TerminalRenderer::new(), stop.clone())?;
    display.enter()?;

    let result = run(&mut display, &config, frames, &stop);

    // Always try to restore terminal state.
    let _ = display.exit();
    result
}

fn run(
    display: &mut TerminalDisplay,
    config: &SceneConfig,
    frames: Vec<Sprite>,
    stop: &StopSignal,
) -> Result<()> {
    let mut scheduler = build_scene(config, Playfield::of(&*display), frames);
    scheduler.run(display, stop);
    Ok(())
}

fn init_logging(config: &SceneConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
