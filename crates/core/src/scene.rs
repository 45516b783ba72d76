//! Scene model: one page of credits text plus its display timing.

use std::time::Instant;

use tui_credits_types::{
    Deadline, Span, DEFAULT_DELAY_MS, DEFAULT_HANG_MS, DEFAULT_KERNING, DEFAULT_LINE_SPACING,
    WHITESPACE_WIDTH,
};

/// One immutable page record from the playlist source.
///
/// Only `lines` carries page-specific content; every other field has a
/// documented default and the data source substitutes it for omitted or
/// malformed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Lines of text, top to bottom. An empty string is a spacer row.
    pub lines: Vec<String>,
    pub hang_time: Span,
    pub delay: Span,
    pub line_spacing: u32,
    pub kerning: u32,
}

impl Page {
    /// A page with the given lines and all defaults.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            hang_time: Span::Millis(DEFAULT_HANG_MS),
            delay: Span::Millis(DEFAULT_DELAY_MS),
            line_spacing: DEFAULT_LINE_SPACING,
            kerning: DEFAULT_KERNING,
        }
    }
}

/// Runtime scene, derived 1:1 from a [`Page`] at startup.
///
/// The deadline is the one mutable part, and only the playback controller
/// writes it. The renderer reads everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    lines: Vec<String>,
    hang_time: Span,
    delay_to_next: Span,
    kerning: u32,
    line_spacing: u32,
    whitespace_width: u32,
    pub(crate) deadline: Deadline,
}

impl Scene {
    pub fn from_page(page: &Page) -> Self {
        Self {
            lines: page.lines.clone(),
            hang_time: page.hang_time,
            delay_to_next: page.delay,
            kerning: page.kerning,
            line_spacing: page.line_spacing,
            whitespace_width: WHITESPACE_WIDTH,
            deadline: Deadline::Never,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn hang_time(&self) -> Span {
        self.hang_time
    }

    pub fn delay_to_next(&self) -> Span {
        self.delay_to_next
    }

    pub fn kerning(&self) -> u32 {
        self.kerning
    }

    pub fn line_spacing(&self) -> u32 {
        self.line_spacing
    }

    /// Advance width of whitespace. Fixed per font, not per page.
    pub fn whitespace_width(&self) -> u32 {
        self.whitespace_width
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// True once the scene's deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_match_the_documented_values() {
        let page = Page::with_lines(["Hosts", "", "Ben LOAF Lesnick"]);
        let scene = Scene::from_page(&page);
        assert_eq!(scene.hang_time(), Span::Millis(5000));
        assert_eq!(scene.delay_to_next(), Span::Millis(2000));
        assert_eq!(scene.kerning(), 3);
        assert_eq!(scene.line_spacing(), 4);
        assert_eq!(scene.whitespace_width(), 30);
        assert_eq!(scene.lines().len(), 3);
        assert_eq!(scene.lines()[1], "");
    }

    #[test]
    fn fresh_scene_has_no_deadline() {
        let scene = Scene::from_page(&Page::with_lines(["A"]));
        assert_eq!(scene.deadline(), Deadline::Never);
        assert!(!scene.is_due(Instant::now()));
    }

    #[test]
    fn infinite_spans_survive_conversion() {
        let page = Page {
            hang_time: Span::Forever,
            delay: Span::Forever,
            ..Page::with_lines(["The End"])
        };
        let scene = Scene::from_page(&page);
        assert_eq!(scene.hang_time(), Span::Forever);
        assert_eq!(scene.delay_to_next(), Span::Forever);
    }
}
