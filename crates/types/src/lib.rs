//! Shared types and constants for the credits roll.
//!
//! Pure data types with no external dependencies, usable from the layout
//! engine, the playback controller, and the terminal host alike.
//!
//! # Timing defaults
//!
//! All durations are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HANG_MS` | 5000 | How long a page stays visible |
//! | `DEFAULT_DELAY_MS` | 2000 | Blank gap before the next page |
//! | `PRIMING_DELAY_MS` | 2000 | Gap before the very first page appears |
//!
//! # Layout defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_KERNING` | 3 | Pixels between adjacent glyph sprites |
//! | `DEFAULT_LINE_SPACING` | 4 | Pixels between lines of text |
//! | `WHITESPACE_WIDTH` | 30 | Fixed advance for a space (not per-page) |

use std::time::{Duration, Instant};

/// Time a scene stays visible after being shown (ms).
pub const DEFAULT_HANG_MS: u64 = 5000;
/// Time a scene stays hidden before the next one appears (ms).
pub const DEFAULT_DELAY_MS: u64 = 2000;
/// Time before the first scene of a fresh playlist is shown (ms).
pub const PRIMING_DELAY_MS: u64 = 2000;

/// Horizontal gap between adjacent glyph sprites (pixels).
pub const DEFAULT_KERNING: u32 = 3;
/// Vertical gap between lines of text (pixels).
pub const DEFAULT_LINE_SPACING: u32 = 4;
/// Advance width of a whitespace glyph. Fixed for the whole font, so it is
/// not a per-page setting.
pub const WHITESPACE_WIDTH: u32 = 30;

/// Classification of a single character against the credits font.
///
/// The font carries exactly `A-Z`, `a-z`, `.` and the space character.
/// Everything else, digits included, is [`GlyphClass::Invalid`] and renders
/// as a blank of fixed width rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    Upper,
    Lower,
    Punctuation,
    Space,
    Invalid,
}

/// Classify one character against the supported glyph set.
pub fn classify(glyph: char) -> GlyphClass {
    match glyph {
        'A'..='Z' => GlyphClass::Upper,
        'a'..='z' => GlyphClass::Lower,
        '.' => GlyphClass::Punctuation,
        ' ' => GlyphClass::Space,
        _ => GlyphClass::Invalid,
    }
}

/// A display or hide duration: a finite number of milliseconds, or forever.
///
/// `Forever` is the sentinel the page data spells as `"Infinity"`. A scene
/// with an infinite hang stays on screen permanently; a scene with an
/// infinite delay ends the credits roll after it is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Millis(u64),
    Forever,
}

impl Span {
    /// Turn this span into an absolute deadline measured from `now`.
    pub fn after(self, now: Instant) -> Deadline {
        match self {
            Span::Millis(ms) => Deadline::At(now + Duration::from_millis(ms)),
            Span::Forever => Deadline::Never,
        }
    }

    pub fn is_forever(self) -> bool {
        matches!(self, Span::Forever)
    }
}

/// Absolute wall-clock instant at which the playback controller must act.
///
/// `Never` can never be satisfied by a tick, which is the documented way to
/// halt the roll on a terminal scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    At(Instant),
    Never,
}

impl Deadline {
    /// True once `now` has reached or passed the deadline.
    pub fn is_due(self, now: Instant) -> bool {
        match self {
            Deadline::At(at) => now >= at,
            Deadline::Never => false,
        }
    }
}
