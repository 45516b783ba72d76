//! Glyph layout engine: maps a line of text to a row of positioned sprites.
//!
//! The engine never touches pixels itself. It resolves each character to an
//! atlas key (or to whitespace), asks the [`GlyphAtlas`] collaborator for the
//! sprite's measured width, and accumulates advances so the renderer can
//! center the line.

use std::fmt;

use tui_credits_types::{classify, GlyphClass};

/// Measured pixel dimensions of one atlas sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSize {
    pub width: u32,
    pub height: u32,
}

/// The pre-rasterized glyph atlas, supplied by the host.
///
/// Keys follow the sprite sheet's filename scheme (see
/// [`GlyphKey::filename`]). `measure` returns `None` for keys the atlas does
/// not carry; the layout engine treats that as a hard error for resolved
/// glyphs, never as something to paper over.
pub trait GlyphAtlas {
    fn measure(&self, key: &GlyphKey) -> Option<GlyphSize>;
}

/// Identity of one sprite in the glyph atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKey {
    Upper(char),
    Lower(char),
    Period,
}

impl GlyphKey {
    /// Filename of this sprite in the atlas sheet.
    pub fn filename(&self) -> String {
        match self {
            GlyphKey::Upper(c) => format!("{}_upper.png", c),
            GlyphKey::Lower(c) => format!("{}_lower.png", c),
            GlyphKey::Period => "Period.png".to_string(),
        }
    }
}

/// Reference glyph for measuring the font's cap height.
pub const CAP_REFERENCE: GlyphKey = GlyphKey::Upper('I');

/// Resolve a character to its atlas key.
///
/// Returns `None` for whitespace and for every unsupported character, so
/// stray input degrades to a fixed-width blank instead of failing.
pub fn resolve_glyph(glyph: char) -> Option<GlyphKey> {
    match classify(glyph) {
        GlyphClass::Upper => Some(GlyphKey::Upper(glyph)),
        GlyphClass::Lower => Some(GlyphKey::Lower(glyph)),
        GlyphClass::Punctuation => Some(GlyphKey::Period),
        GlyphClass::Space | GlyphClass::Invalid => None,
    }
}

/// One slot of a laid-out line, in text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineGlyph {
    /// A sprite to draw, with its measured width for advancing.
    Sprite { key: GlyphKey, width: u32 },
    /// Whitespace: nothing to draw, advance by the fixed whitespace width.
    Space,
}

/// A measured line: its glyph slots and the exact pixel span they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLayout {
    pub glyphs: Vec<LineGlyph>,
    /// Sum of all advances minus the trailing kerning unit. This is the
    /// span used for center alignment.
    pub total_width: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Blank lines are spacer rows; callers must filter them out before
    /// asking for a layout. Laying one out would produce a negative width.
    EmptyLine,
    /// A character resolved to a letter or period, but the atlas has no
    /// sprite under that filename. Dropping the character would silently
    /// break alignment, so this is fatal for the render pass.
    MissingGlyph { filename: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyLine => write!(f, "cannot lay out an empty line"),
            LayoutError::MissingGlyph { filename } => {
                write!(f, "glyph atlas has no sprite {:?}", filename)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Lay out one line of text left to right.
///
/// Sprites advance by `width + kerning`; whitespace advances by the fixed
/// `whitespace_width`, independent of kerning. The returned
/// [`LineLayout::total_width`] excludes the kerning that would follow the
/// final glyph.
pub fn layout_line<A: GlyphAtlas + ?Sized>(
    line: &str,
    kerning: u32,
    whitespace_width: u32,
    atlas: &A,
) -> Result<LineLayout, LayoutError> {
    if line.is_empty() {
        return Err(LayoutError::EmptyLine);
    }

    let mut glyphs = Vec::with_capacity(line.chars().count());
    let mut total_width: i32 = 0;

    for ch in line.chars() {
        match resolve_glyph(ch) {
            Some(key) => {
                let size = atlas.measure(&key).ok_or_else(|| LayoutError::MissingGlyph {
                    filename: key.filename(),
                })?;
                glyphs.push(LineGlyph::Sprite {
                    key,
                    width: size.width,
                });
                total_width += size.width as i32 + kerning as i32;
            }
            None => {
                glyphs.push(LineGlyph::Space);
                total_width += whitespace_width as i32;
            }
        }
    }

    // The last glyph is not followed by another, so its kerning unit does
    // not count toward the centered span.
    total_width -= kerning as i32;

    Ok(LineLayout {
        glyphs,
        total_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Atlas where every sprite has the same fixed size.
    struct FixedAtlas {
        size: GlyphSize,
    }

    impl FixedAtlas {
        fn with_width(width: u32) -> Self {
            Self {
                size: GlyphSize { width, height: 28 },
            }
        }
    }

    impl GlyphAtlas for FixedAtlas {
        fn measure(&self, _key: &GlyphKey) -> Option<GlyphSize> {
            Some(self.size)
        }
    }

    /// Atlas with no sprites at all.
    struct EmptyAtlas;

    impl GlyphAtlas for EmptyAtlas {
        fn measure(&self, _key: &GlyphKey) -> Option<GlyphSize> {
            None
        }
    }

    #[test]
    fn resolve_maps_case_and_period() {
        assert_eq!(resolve_glyph('A'), Some(GlyphKey::Upper('A')));
        assert_eq!(resolve_glyph('q'), Some(GlyphKey::Lower('q')));
        assert_eq!(resolve_glyph('.'), Some(GlyphKey::Period));
        assert_eq!(resolve_glyph(' '), None);
        assert_eq!(resolve_glyph('7'), None);
        assert_eq!(resolve_glyph('!'), None);
    }

    #[test]
    fn resolve_is_pure_over_the_supported_set() {
        for ch in ('A'..='Z').chain('a'..='z').chain(['.', ' ']) {
            assert_eq!(resolve_glyph(ch), resolve_glyph(ch));
        }
    }

    #[test]
    fn filenames_match_the_sprite_sheet() {
        assert_eq!(GlyphKey::Upper('A').filename(), "A_upper.png");
        assert_eq!(GlyphKey::Lower('z').filename(), "z_lower.png");
        assert_eq!(GlyphKey::Period.filename(), "Period.png");
    }

    #[test]
    fn single_glyph_has_no_trailing_kerning() {
        let atlas = FixedAtlas::with_width(20);
        let layout = layout_line("A", 3, 30, &atlas).unwrap();
        assert_eq!(layout.total_width, 20);
        assert_eq!(layout.glyphs.len(), 1);
    }

    #[test]
    fn two_glyphs_include_one_kerning_unit() {
        let atlas = FixedAtlas::with_width(20);
        let layout = layout_line("AB", 3, 30, &atlas).unwrap();
        assert_eq!(layout.total_width, 43);
    }

    #[test]
    fn whitespace_advance_ignores_kerning() {
        let atlas = FixedAtlas::with_width(20);
        // "A B": 20 + 3 + 30 + 20 + 3, minus the trailing 3.
        let layout = layout_line("A B", 3, 30, &atlas).unwrap();
        assert_eq!(layout.total_width, 73);
        assert_eq!(layout.glyphs[1], LineGlyph::Space);
    }

    #[test]
    fn unsupported_characters_degrade_to_whitespace() {
        let atlas = FixedAtlas::with_width(20);
        let layout = layout_line("A7B", 3, 30, &atlas).unwrap();
        assert_eq!(layout.glyphs[1], LineGlyph::Space);
        assert_eq!(layout.total_width, 73);
    }

    #[test]
    fn empty_line_is_rejected() {
        let atlas = FixedAtlas::with_width(20);
        assert_eq!(
            layout_line("", 3, 30, &atlas),
            Err(LayoutError::EmptyLine)
        );
    }

    #[test]
    fn missing_atlas_entry_is_fatal() {
        let err = layout_line("A", 3, 30, &EmptyAtlas).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingGlyph {
                filename: "A_upper.png".to_string()
            }
        );
    }

    #[test]
    fn spaces_alone_still_measure() {
        let atlas = FixedAtlas::with_width(20);
        let layout = layout_line("  ", 3, 30, &atlas).unwrap();
        assert_eq!(layout.total_width, 57);
    }
}
