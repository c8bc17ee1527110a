//! Terminal snake runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and the engine
//! in between. Configuration comes from `SNAKE_*` environment variables.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_snake::core::GameSnapshot;
use tui_snake::engine::{
    AudioMode, AudioSink, BellAudio, Clock, Engine, FrameClock, FrameStatus, HighscoreStore,
    JsonFileStore, NullAudio, RuntimeConfig,
};
use tui_snake::input::{from_crossterm, RawEvent};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::Position;

/// Pointer positions outside the board; never inside the play button.
const OFF_BOARD: Position = Position::new(-1, -1);

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_logging(path)?;
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let audio: Box<dyn AudioSink> = match config.audio {
        AudioMode::Bell => Box::new(BellAudio::stdout()),
        AudioMode::Off => Box::new(NullAudio),
    };
    let store = JsonFileStore::new(&config.highscore_path);
    let mut engine = Engine::new(config.game, seed, store, audio)?;
    info!(path = %config.highscore_path.display(), "highscore file");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<S: HighscoreStore, A: AudioSink>(
    term: &mut TerminalRenderer,
    engine: &mut Engine<S, A>,
) -> Result<()> {
    let view = GameView::default();
    let mut clock = FrameClock::new();
    let mut snap = GameSnapshot::default();
    let mut back = FrameBuffer::new(0, 0);
    let mut pending: Vec<RawEvent> = Vec::with_capacity(16);
    let mut elapsed_ms = 0;

    engine.snapshot_into(&mut snap);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = view.layout(&snap, viewport);

        // Drain everything that arrived since the last frame.
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
                continue;
            }
            let raw = from_crossterm(&ev, |col, row| {
                Some(layout.to_game_coords(col, row).unwrap_or(OFF_BOARD))
            });
            pending.extend(raw);
        }

        if engine.frame(pending.drain(..), elapsed_ms) == FrameStatus::Quit {
            return Ok(());
        }

        engine.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut back);
        term.present(&mut back)?;

        elapsed_ms = clock.tick(engine.tick_rate());
    }
}

/// Log to a file; the terminal is busy with the game.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
