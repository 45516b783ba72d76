//! Page data source: loads the credits playlist from JSON.
//!
//! The document shape follows the original hand-edited credits data:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "hangtime": 5000,
//!       "delay": "Infinity",
//!       "linespacing": 4,
//!       "kerning": 3,
//!       "lines": ["Hosts", "", "Ben LOAF Lesnick"]
//!     }
//!   ]
//! }
//! ```
//!
//! Only `lines` is required. The timing fields accept positive millisecond
//! numbers or the literal string `"Infinity"`; anything else (omitted,
//! non-numeric, zero, negative) silently falls back to the documented
//! default, so sloppy hand edits degrade instead of breaking the roll. A
//! record without `lines`, or a playlist without pages, is fatal at load.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use tui_credits_core::Page;
use tui_credits_types::{
    Span, DEFAULT_DELAY_MS, DEFAULT_HANG_MS, DEFAULT_KERNING, DEFAULT_LINE_SPACING,
};

#[derive(Debug, Deserialize)]
struct PlaylistDoc {
    pages: Vec<PageRecord>,
}

/// Raw page record. Optional fields stay untyped so malformed values can be
/// defaulted per field instead of failing the whole document.
#[derive(Debug, Deserialize)]
struct PageRecord {
    lines: Vec<String>,
    #[serde(default)]
    hangtime: Option<Value>,
    #[serde(default)]
    delay: Option<Value>,
    #[serde(default)]
    linespacing: Option<Value>,
    #[serde(default)]
    kerning: Option<Value>,
}

/// A timing field: positive milliseconds, the `"Infinity"` sentinel, or the
/// default for everything else. Each field checks its own sentinel.
fn span_field(value: Option<&Value>, default_ms: u64) -> Span {
    match value {
        Some(Value::String(s)) if s == "Infinity" => Span::Forever,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(ms) if ms.is_finite() && ms > 0.0 => Span::Millis(ms as u64),
            _ => Span::Millis(default_ms),
        },
        _ => Span::Millis(default_ms),
    }
}

/// A pixel-count field: non-negative integer or the default.
fn pixel_field(value: Option<&Value>, default_px: u32) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|px| u32::try_from(px).ok())
            .unwrap_or(default_px),
        _ => default_px,
    }
}

fn page_from_record(record: &PageRecord) -> Page {
    Page {
        lines: record.lines.clone(),
        hang_time: span_field(record.hangtime.as_ref(), DEFAULT_HANG_MS),
        delay: span_field(record.delay.as_ref(), DEFAULT_DELAY_MS),
        line_spacing: pixel_field(record.linespacing.as_ref(), DEFAULT_LINE_SPACING),
        kerning: pixel_field(record.kerning.as_ref(), DEFAULT_KERNING),
    }
}

/// Parse a playlist document from a JSON string.
pub fn parse_playlist(json: &str) -> Result<Vec<Page>> {
    let doc: PlaylistDoc =
        serde_json::from_str(json).context("malformed credits playlist")?;
    if doc.pages.is_empty() {
        bail!("credits playlist has no pages");
    }
    Ok(doc.pages.iter().map(page_from_record).collect())
}

/// Load and parse a playlist file.
pub fn load_playlist(path: &Path) -> Result<Vec<Page>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading credits playlist {}", path.display()))?;
    parse_playlist(&json).with_context(|| format!("in {}", path.display()))
}
