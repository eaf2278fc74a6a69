//! Built-in 8x8 bitmap face, the last resort of every font chain.
//!
//! Each glyph is an 8x8 cell (one byte per row, least significant bit on the
//! left) scaled up by an integer factor. Characters outside the bundled sets
//! render as `?`.

use super::text::TextBox;
use crate::Color;
use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const CELL: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFace {
    /// Side length in pixels of one glyph dot
    pub scale: u32,
}

impl BitmapFace {
    /// Pick the integer scale closest to `px_size`, never below 1.
    pub fn for_size(px_size: f32) -> Self {
        let scale = (px_size / CELL as f32).round();
        let scale = if scale.is_finite() && scale >= 1.0 { scale as u32 } else { 1 };
        Self { scale }
    }

    fn glyph(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| GREEK_FONTS.get(c))
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or_default()
    }

    /// Visit every set dot as `(x, y)` in pixels relative to the origin.
    /// Coordinates saturate at `i32::MAX`; such dots are off any canvas.
    fn dots(&self, text: &str, mut f: impl FnMut(i32, i32)) {
        let s = i32::try_from(self.scale).unwrap_or(i32::MAX);
        let cell = (CELL as i32).saturating_mul(s);
        for (i, c) in text.chars().enumerate() {
            let rows = Self::glyph(c);
            let cell_x = i32::try_from(i).unwrap_or(i32::MAX).saturating_mul(cell);
            for (row, bits) in rows.iter().enumerate() {
                for bit in 0..8i32 {
                    if bits & (1 << bit) != 0 {
                        f(cell_x.saturating_add(bit.saturating_mul(s)), (row as i32).saturating_mul(s));
                    }
                }
            }
        }
    }

    pub fn measure(&self, text: &str) -> TextBox {
        let s = i32::try_from(self.scale).unwrap_or(i32::MAX);
        let mut bbox = TextBox::default();
        self.dots(text, |x, y| {
            let dot = TextBox {
                left: x,
                top: y,
                right: x.saturating_add(s),
                bottom: y.saturating_add(s),
            };
            bbox = bbox.union(&dot);
        });
        bbox
    }

    pub fn draw(&self, img: &mut RgbImage, color: Color, x: i32, y: i32, text: &str) {
        let fill = Rgb(color.channels());
        let side = i32::try_from(self.scale).unwrap_or(i32::MAX);
        let (width, height) = (img.width() as i32, img.height() as i32);
        self.dots(text, |dx, dy| {
            let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
            // Off-canvas dots are skipped, which also keeps rect edges in i32 range
            if px >= width
                || py >= height
                || px.checked_add(side).is_none()
                || py.checked_add(side).is_none()
            {
                return;
            }
            draw_filled_rect_mut(img, Rect::at(px, py).of_size(side as u32, side as u32), fill);
        });
    }
}
