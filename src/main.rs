//! Terminal credits runner (default binary).
//!
//! Drives the playback controller from a simple frame loop: poll the
//! terminal for quit keys with a frame-length timeout, tick the controller
//! against the wall clock, and repaint only when a tick changed the stage.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use tui_credits::core::{Page, Playback, SceneRenderer, Tick};
use tui_credits::pages::{load_playlist, parse_playlist};
use tui_credits::term::{CellAtlas, FrameBuffer, TermScreen, TermStage};

/// Frame pacing for the poll loop. Deadlines are absolute, so the exact
/// interval only affects latency, not timing.
const FRAME_MS: u64 = 33;

/// Playlist compiled in as the default when no file is given.
const DEFAULT_PLAYLIST: &str = include_str!("../assets/credits.json");

fn main() -> Result<()> {
    let pages = match std::env::args().nth(1) {
        Some(path) => load_playlist(Path::new(&path))?,
        None => parse_playlist(DEFAULT_PLAYLIST)?,
    };

    let mut screen = TermScreen::new();
    screen.enter()?;

    let result = run(&mut screen, &pages);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TermScreen, pages: &[Page]) -> Result<()> {
    let atlas = CellAtlas::new();
    let renderer = SceneRenderer::new(&atlas)?;
    let mut playback = Playback::new(pages, Instant::now())?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut stage = TermStage::new(w as u32, h as u32);
    let mut fb = FrameBuffer::new(w, h);

    // Initial blank frame so the alternate screen starts clean.
    stage.compose(&atlas, &mut fb);
    screen.draw(&fb)?;

    loop {
        if event::poll(Duration::from_millis(FRAME_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                Event::Resize(w, h) => {
                    stage.set_viewport(w as u32, h as u32);
                    stage.compose(&atlas, &mut fb);
                    screen.draw(&fb)?;
                }
                _ => {}
            }
        }

        match playback.tick(Instant::now(), &renderer, &atlas, &mut stage)? {
            Tick::Idle => {}
            Tick::Shown | Tick::Cleared => {
                stage.compose(&atlas, &mut fb);
                screen.draw(&fb)?;
            }
        }
    }
}
