//! SceneRenderer: centers a scene's text block on a stage and attaches
//! positioned glyph sprites.
//!
//! The renderer is pure apart from the sprite attachments it pushes into the
//! [`SpriteStage`]. It never clears the stage; calling it twice without a
//! clear duplicates every sprite, and clearing is the playback controller's
//! job.

use crate::layout::{layout_line, GlyphAtlas, GlyphKey, LayoutError, LineGlyph, CAP_REFERENCE};
use crate::scene::Scene;

/// One sprite placed at an absolute top-left position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpritePlacement {
    pub key: GlyphKey,
    pub x: i32,
    pub y: i32,
}

/// The drawing surface collaborator.
///
/// The stage takes ownership of attached sprites until the next
/// `detach_all`, and exposes the viewport size used for centering.
pub trait SpriteStage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn attach(&mut self, sprite: SpritePlacement);
    fn detach_all(&mut self);
}

/// Renders scenes onto a stage using a glyph atlas.
#[derive(Debug)]
pub struct SceneRenderer {
    cap_height: u32,
}

impl SceneRenderer {
    /// Measure the font's cap height from the reference uppercase glyph.
    ///
    /// Queried once and cached; a font without the reference glyph cannot
    /// be vertically laid out at all, so that is a constructor error.
    pub fn new<A: GlyphAtlas + ?Sized>(atlas: &A) -> Result<Self, LayoutError> {
        let reference = atlas
            .measure(&CAP_REFERENCE)
            .ok_or_else(|| LayoutError::MissingGlyph {
                filename: CAP_REFERENCE.filename(),
            })?;
        Ok(Self {
            cap_height: reference.height,
        })
    }

    pub fn cap_height(&self) -> u32 {
        self.cap_height
    }

    /// Render `scene` onto `stage`.
    ///
    /// Every line, blank or not, consumes one row of vertical pitch; blank
    /// lines skip glyph emission entirely. Each non-blank line is centered
    /// horizontally from its measured pixel span.
    pub fn render<A, S>(&self, scene: &Scene, atlas: &A, stage: &mut S) -> Result<(), LayoutError>
    where
        A: GlyphAtlas + ?Sized,
        S: SpriteStage + ?Sized,
    {
        let pitch = (self.cap_height + scene.line_spacing()) as i32;
        let line_count = scene.lines().len() as i32;

        // Center the whole block, then drop by half a spacing unit so the
        // inter-line gaps split evenly above and below.
        let mut y = stage.height() as i32 / 2 - line_count * pitch / 2;
        y += scene.line_spacing() as i32 / 2;

        for line in scene.lines() {
            if line.is_empty() {
                y += pitch;
                continue;
            }

            let layout = layout_line(line, scene.kerning(), scene.whitespace_width(), atlas)?;
            let mut x = stage.width() as i32 / 2 - layout.total_width / 2;

            for glyph in &layout.glyphs {
                match *glyph {
                    LineGlyph::Sprite { key, width } => {
                        stage.attach(SpritePlacement { key, x, y });
                        x += width as i32 + scene.kerning() as i32;
                    }
                    LineGlyph::Space => {
                        x += scene.whitespace_width() as i32;
                    }
                }
            }

            y += pitch;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GlyphSize;
    use crate::scene::Page;

    const CAP: u32 = 28;

    struct FixedAtlas {
        width: u32,
    }

    impl GlyphAtlas for FixedAtlas {
        fn measure(&self, _key: &GlyphKey) -> Option<GlyphSize> {
            Some(GlyphSize {
                width: self.width,
                height: CAP,
            })
        }
    }

    struct RecordingStage {
        width: u32,
        height: u32,
        sprites: Vec<SpritePlacement>,
    }

    impl RecordingStage {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                sprites: Vec::new(),
            }
        }
    }

    impl SpriteStage for RecordingStage {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn attach(&mut self, sprite: SpritePlacement) {
            self.sprites.push(sprite);
        }
        fn detach_all(&mut self) {
            self.sprites.clear();
        }
    }

    fn renderer(atlas: &FixedAtlas) -> SceneRenderer {
        SceneRenderer::new(atlas).unwrap()
    }

    #[test]
    fn cap_height_comes_from_the_reference_glyph() {
        let atlas = FixedAtlas { width: 20 };
        assert_eq!(renderer(&atlas).cap_height(), CAP);
    }

    #[test]
    fn single_line_is_centered_both_ways() {
        let atlas = FixedAtlas { width: 20 };
        let mut stage = RecordingStage::new(200, 100);
        let scene = Scene::from_page(&Page::with_lines(["AB"]));

        renderer(&atlas).render(&scene, &atlas, &mut stage).unwrap();

        // Width 43 (20 + 3 + 20), so the line starts at 100 - 21 = 79.
        assert_eq!(stage.sprites.len(), 2);
        assert_eq!(stage.sprites[0].x, 79);
        assert_eq!(stage.sprites[1].x, 79 + 20 + 3);

        // One line: y = 50 - pitch/2 + spacing/2 = 50 - 16 + 2.
        assert_eq!(stage.sprites[0].y, 36);
        assert_eq!(stage.sprites[1].y, 36);
    }

    #[test]
    fn blank_lines_consume_pitch_without_sprites() {
        let atlas = FixedAtlas { width: 20 };
        let mut stage = RecordingStage::new(200, 100);
        let scene = Scene::from_page(&Page::with_lines(["A", "", "A"]));

        renderer(&atlas).render(&scene, &atlas, &mut stage).unwrap();

        // Only the two non-blank lines emit sprites, two pitches apart.
        assert_eq!(stage.sprites.len(), 2);
        let pitch = (CAP + scene.line_spacing()) as i32;
        assert_eq!(stage.sprites[1].y - stage.sprites[0].y, 2 * pitch);
    }

    #[test]
    fn whitespace_emits_no_sprite_but_advances() {
        let atlas = FixedAtlas { width: 20 };
        let mut stage = RecordingStage::new(200, 100);
        let scene = Scene::from_page(&Page::with_lines(["A B"]));

        renderer(&atlas).render(&scene, &atlas, &mut stage).unwrap();

        assert_eq!(stage.sprites.len(), 2);
        // Second sprite sits one glyph + kerning + whitespace farther along.
        assert_eq!(stage.sprites[1].x - stage.sprites[0].x, 20 + 3 + 30);
    }

    #[test]
    fn rendering_twice_without_clear_duplicates_sprites() {
        let atlas = FixedAtlas { width: 20 };
        let mut stage = RecordingStage::new(200, 100);
        let scene = Scene::from_page(&Page::with_lines(["AB"]));
        let renderer = renderer(&atlas);

        renderer.render(&scene, &atlas, &mut stage).unwrap();
        renderer.render(&scene, &atlas, &mut stage).unwrap();
        assert_eq!(stage.sprites.len(), 4);
    }

    #[test]
    fn missing_reference_glyph_fails_construction() {
        struct NoAtlas;
        impl GlyphAtlas for NoAtlas {
            fn measure(&self, _key: &GlyphKey) -> Option<GlyphSize> {
                None
            }
        }
        let err = SceneRenderer::new(&NoAtlas).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingGlyph {
                filename: "I_upper.png".to_string()
            }
        );
    }
}
