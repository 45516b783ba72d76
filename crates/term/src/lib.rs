//! Terminal host for the credits roll.
//!
//! Implements the core crate's collaborator seams against a real terminal:
//!
//! - [`fb`]: a 2D framebuffer of styled character cells
//! - [`atlas`]: a built-in bitmap glyph atlas rasterized into cells
//! - [`stage`]: the sprite stage that owns attachments and composes frames
//! - [`screen`]: crossterm raw-mode writer that flushes framebuffers

pub mod atlas;
pub mod fb;
pub mod screen;
pub mod stage;

pub use atlas::CellAtlas;
pub use fb::{Cell, FrameBuffer};
pub use screen::TermScreen;
pub use stage::TermStage;
