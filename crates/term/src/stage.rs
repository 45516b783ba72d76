//! TermStage: the drawing-surface collaborator backed by a framebuffer.
//!
//! Owns the sprites the renderer attaches and composes them into a
//! [`FrameBuffer`] on demand. Attachment order is preserved, although with
//! a monochrome font overlap order is invisible.

use tui_credits_core::{SpritePlacement, SpriteStage};

use crate::atlas::CellAtlas;
use crate::fb::FrameBuffer;

pub struct TermStage {
    width: u32,
    height: u32,
    sprites: Vec<SpritePlacement>,
}

impl TermStage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sprites: Vec::new(),
        }
    }

    /// Track a new viewport size. Already-attached sprites keep their
    /// positions until the next render pass recomputes them.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn sprites(&self) -> &[SpritePlacement] {
        &self.sprites
    }

    /// Compose all attached sprites into `fb`, clearing it first.
    pub fn compose(&self, atlas: &CellAtlas, fb: &mut FrameBuffer) {
        fb.resize(self.width as u16, self.height as u16);
        fb.clear();
        for sprite in &self.sprites {
            atlas.draw(&sprite.key, sprite.x, sprite.y, fb);
        }
    }
}

impl SpriteStage for TermStage {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tui_credits_core::GlyphKey;

    #[test]
    fn compose_draws_attached_sprites() {
        let atlas = CellAtlas::new();
        let mut stage = TermStage::new(60, 12);
        let mut fb = FrameBuffer::new(60, 12);

        stage.attach(SpritePlacement {
            key: GlyphKey::Upper('A'),
            x: 2,
            y: 2,
        });
        stage.compose(&atlas, &mut fb);
        assert!(fb.inked() > 0);

        stage.detach_all();
        stage.compose(&atlas, &mut fb);
        assert_eq!(fb.inked(), 0);
    }

    #[test]
    fn compose_follows_the_viewport() {
        let atlas = CellAtlas::new();
        let mut stage = TermStage::new(60, 12);
        let mut fb = FrameBuffer::new(1, 1);

        stage.set_viewport(80, 24);
        stage.compose(&atlas, &mut fb);
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }
}
