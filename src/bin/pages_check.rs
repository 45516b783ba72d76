//! Playlist linter: validates a credits JSON file without opening a screen.
//!
//! Usage: `pages-check <playlist.json>`
//!
//! Reports the page count and effective timing per page, and warns about
//! characters outside the font (they render as blank space, which is usually
//! a surprise in hand-edited data). Exits non-zero on a fatal playlist
//! error.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Result};

use tui_credits::core::Page;
use tui_credits::pages::load_playlist;
use tui_credits::types::{classify, GlyphClass, Span};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pages-check: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: pages-check <playlist.json>"))?;
    let pages = load_playlist(Path::new(&path))?;

    println!("{}: {} pages", path, pages.len());
    let mut warnings = 0usize;
    for (index, page) in pages.iter().enumerate() {
        println!(
            "  page {}: {} lines, hang {}, delay {}",
            index + 1,
            page.lines.len(),
            span_text(page.hang_time),
            span_text(page.delay),
        );
        warnings += warn_unsupported(index, page);
    }

    if pages.iter().all(|p| !p.delay.is_forever()) {
        println!("  note: no page has an infinite delay; the roll loops forever");
    }
    if warnings > 0 {
        println!("  {} warning(s): unsupported characters render as blanks", warnings);
    }
    Ok(())
}

fn span_text(span: Span) -> String {
    match span {
        Span::Millis(ms) => format!("{}ms", ms),
        Span::Forever => "Infinity".to_string(),
    }
}

fn warn_unsupported(index: usize, page: &Page) -> usize {
    let mut count = 0;
    for line in &page.lines {
        for ch in line.chars() {
            if classify(ch) == GlyphClass::Invalid {
                println!(
                    "  warning: page {} line {:?} has unsupported character {:?}",
                    index + 1,
                    line,
                    ch
                );
                count += 1;
            }
        }
    }
    count
}
