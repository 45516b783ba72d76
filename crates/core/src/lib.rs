//! Core credits logic - pure, deterministic, and testable
//!
//! This crate contains the glyph layout engine, the scene model, and the
//! deadline-driven playback state machine. It has **zero dependencies** on
//! UI, timing sources, or I/O:
//!
//! - The glyph atlas is a trait ([`GlyphAtlas`]) supplying pre-measured
//!   sprite sizes.
//! - The drawing surface is a trait ([`SpriteStage`]) accepting positioned
//!   sprites and exposing its viewport size.
//! - The clock is whatever `Instant` the caller passes into
//!   [`Playback::tick`], so tests can drive time synthetically.
//!
//! # Module Structure
//!
//! - [`layout`]: character-to-sprite resolution and per-line advance/width
//!   computation
//! - [`scene`]: one page of credits text plus its timing parameters
//! - [`render`]: centers a scene's lines on a stage and attaches sprites
//! - [`playback`]: the cyclic show/clear state machine over a scene queue

pub mod layout;
pub mod playback;
pub mod render;
pub mod scene;

pub use layout::{
    layout_line, resolve_glyph, GlyphAtlas, GlyphKey, GlyphSize, LayoutError, LineGlyph,
    LineLayout,
};
pub use playback::{Phase, Playback, PlaybackError, Tick};
pub use render::{SceneRenderer, SpritePlacement, SpriteStage};
pub use scene::{Page, Scene};
