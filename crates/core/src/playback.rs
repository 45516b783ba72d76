//! Playback controller: the cyclic show/clear state machine.
//!
//! The controller owns the scene queue and every deadline. It is driven by
//! an external frame clock calling [`Playback::tick`] with the current
//! instant; tick spacing carries no meaning because every comparison is
//! against an absolute deadline. At most one transition happens per tick,
//! so a scene is always visible for at least one full tick before it can be
//! cleared.

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use tui_credits_types::{Deadline, Span, PRIMING_DELAY_MS};

use crate::layout::{GlyphAtlas, LayoutError};
use crate::render::{SceneRenderer, SpriteStage};
use crate::scene::{Page, Scene};

/// What the controller is waiting to do when the current deadline expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The stage is blank; show the current scene when due.
    RenderingDue,
    /// The current scene is on stage; clear it and advance when due.
    ClearedWaiting,
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The deadline has not expired; nothing happened.
    Idle,
    /// The current scene was rendered onto the stage.
    Shown,
    /// The stage was cleared and the playlist advanced.
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// A playlist without a single page cannot loop.
    EmptyPlaylist,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::EmptyPlaylist => write!(f, "credits playlist has no pages"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// The cyclic playback state machine over an ordered scene queue.
///
/// Exactly one scene is current; the rest wait in FIFO order. After a scene
/// is cleared it rotates to the back of the queue, unless its delay is
/// infinite, which retires it and freezes the roll.
#[derive(Debug)]
pub struct Playback {
    current: Scene,
    queue: VecDeque<Scene>,
    phase: Phase,
}

impl Playback {
    /// Seed the playlist from the ordered page list.
    ///
    /// The first scene's deadline is primed a short fixed interval into the
    /// future so the first paint is not instantaneous.
    pub fn new(pages: &[Page], now: Instant) -> Result<Self, PlaybackError> {
        let mut queue: VecDeque<Scene> = pages.iter().map(Scene::from_page).collect();
        let mut current = queue.pop_front().ok_or(PlaybackError::EmptyPlaylist)?;
        current.deadline = Span::Millis(PRIMING_DELAY_MS).after(now);

        Ok(Self {
            current,
            queue,
            phase: Phase::RenderingDue,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> &Scene {
        &self.current
    }

    /// Scenes waiting behind the current one, in rotation order.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Advance the state machine against the given instant.
    ///
    /// Performs at most one transition: either the current scene is shown,
    /// or the stage is cleared and the playlist rotates. Returns what
    /// happened so hosts can decide whether to repaint.
    pub fn tick<A, S>(
        &mut self,
        now: Instant,
        renderer: &SceneRenderer,
        atlas: &A,
        stage: &mut S,
    ) -> Result<Tick, LayoutError>
    where
        A: GlyphAtlas + ?Sized,
        S: SpriteStage + ?Sized,
    {
        if !self.current.deadline.is_due(now) {
            return Ok(Tick::Idle);
        }

        match self.phase {
            Phase::RenderingDue => {
                renderer.render(&self.current, atlas, stage)?;
                self.current.deadline = self.current.hang_time().after(now);
                self.phase = Phase::ClearedWaiting;
                Ok(Tick::Shown)
            }
            Phase::ClearedWaiting => {
                stage.detach_all();
                let delay = self.current.delay_to_next();

                if delay.is_forever() {
                    // An infinite delay means "never return": the shown
                    // scene is retired instead of rejoining the cycle, and
                    // whatever follows never gets a finite deadline.
                    if let Some(next) = self.queue.pop_front() {
                        self.current = next;
                    }
                    self.current.deadline = Deadline::Never;
                } else {
                    if let Some(next) = self.queue.pop_front() {
                        let shown = std::mem::replace(&mut self.current, next);
                        self.queue.push_back(shown);
                    }
                    // A single-scene playlist keeps cycling over itself.
                    self.current.deadline = delay.after(now);
                }

                self.phase = Phase::RenderingDue;
                Ok(Tick::Cleared)
            }
        }
    }
}
