//! Built-in glyph atlas: a 5x7 bitmap font rasterized into terminal cells.
//!
//! Stands in for the sprite-sheet atlas of the original credits font.
//! Letter pixels are stretched [`GLYPH_SCALE_X`] cells wide to roughly match
//! sprite proportions (an `A` measures 20 cells across, and the fixed
//! 30-cell whitespace reads like a word gap). Lowercase keys reuse the
//! letter shape rendered dim; uppercase renders bold.

use tui_credits_core::{GlyphAtlas, GlyphKey, GlyphSize};

use crate::fb::{Cell, FrameBuffer};

/// Horizontal stretch applied to every font pixel.
pub const GLYPH_SCALE_X: u32 = 4;

/// Rows in the bitmap font; this is the atlas cap height.
pub const CAP_ROWS: u32 = 7;

/// One glyph bitmap: column count and seven rows of bits, MSB leftmost.
struct Bitmap {
    cols: u32,
    rows: [u8; 7],
}

#[rustfmt::skip]
const LETTERS: [Bitmap; 26] = [
    Bitmap { cols: 5, rows: [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001] }, // A
    Bitmap { cols: 5, rows: [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110] }, // B
    Bitmap { cols: 5, rows: [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110] }, // C
    Bitmap { cols: 5, rows: [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110] }, // D
    Bitmap { cols: 5, rows: [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111] }, // E
    Bitmap { cols: 5, rows: [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000] }, // F
    Bitmap { cols: 5, rows: [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110] }, // G
    Bitmap { cols: 5, rows: [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001] }, // H
    Bitmap { cols: 3, rows: [0b111, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111] },               // I
    Bitmap { cols: 5, rows: [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100] }, // J
    Bitmap { cols: 5, rows: [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001] }, // K
    Bitmap { cols: 5, rows: [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111] }, // L
    Bitmap { cols: 5, rows: [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001] }, // M
    Bitmap { cols: 5, rows: [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001] }, // N
    Bitmap { cols: 5, rows: [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110] }, // O
    Bitmap { cols: 5, rows: [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000] }, // P
    Bitmap { cols: 5, rows: [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101] }, // Q
    Bitmap { cols: 5, rows: [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001] }, // R
    Bitmap { cols: 5, rows: [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110] }, // S
    Bitmap { cols: 5, rows: [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100] }, // T
    Bitmap { cols: 5, rows: [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110] }, // U
    Bitmap { cols: 5, rows: [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100] }, // V
    Bitmap { cols: 5, rows: [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010] }, // W
    Bitmap { cols: 5, rows: [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001] }, // X
    Bitmap { cols: 5, rows: [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100] }, // Y
    Bitmap { cols: 5, rows: [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111] }, // Z
];

const PERIOD: Bitmap = Bitmap {
    cols: 2,
    rows: [0b00, 0b00, 0b00, 0b00, 0b00, 0b11, 0b11],
};

fn bitmap_for(key: &GlyphKey) -> Option<&'static Bitmap> {
    match key {
        GlyphKey::Upper(c) if c.is_ascii_uppercase() => {
            Some(&LETTERS[(*c as u8 - b'A') as usize])
        }
        GlyphKey::Lower(c) if c.is_ascii_lowercase() => {
            Some(&LETTERS[(c.to_ascii_uppercase() as u8 - b'A') as usize])
        }
        GlyphKey::Period => Some(&PERIOD),
        _ => None,
    }
}

/// The built-in cell-raster atlas. Stateless; every lookup is a table read.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellAtlas;

impl CellAtlas {
    pub fn new() -> Self {
        Self
    }

    /// Rasterize the sprite under `key` into `fb` at top-left `(x, y)`,
    /// clipping at the framebuffer edges. Unknown keys draw nothing.
    pub fn draw(&self, key: &GlyphKey, x: i32, y: i32, fb: &mut FrameBuffer) {
        let Some(bitmap) = bitmap_for(key) else {
            return;
        };
        let dim = matches!(key, GlyphKey::Lower(_));
        let cell = Cell {
            ch: '█',
            bold: !dim,
            dim,
        };

        for (row, &bits) in bitmap.rows.iter().enumerate() {
            for col in 0..bitmap.cols {
                if bits >> (bitmap.cols - 1 - col) & 1 == 0 {
                    continue;
                }
                let px = x + (col * GLYPH_SCALE_X) as i32;
                for dx in 0..GLYPH_SCALE_X as i32 {
                    fb.put(px + dx, y + row as i32, cell);
                }
            }
        }
    }
}

impl GlyphAtlas for CellAtlas {
    fn measure(&self, key: &GlyphKey) -> Option<GlyphSize> {
        bitmap_for(key).map(|bitmap| GlyphSize {
            width: bitmap.cols * GLYPH_SCALE_X,
            height: CAP_ROWS,
        })
    }
}
