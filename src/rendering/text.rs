//! Text measurement and placement for outline faces
//!
//! Glyphs are laid out on a single line from the origin with the baseline at
//! the face's ascent, so `y = 0` is the ascender line. Measurement and drawing
//! share the same layout pass, which keeps the measured box and the painted
//! ink in agreement.

use crate::{Color, Size};
use ab_glyph::{Font, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::pixelops::weighted_sum;

/// Ink bounding box of rendered text, relative to the draw origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box covering both; empty boxes are ignored.
    pub fn union(&self, other: &TextBox) -> TextBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Top-left corner at which a box of `bbox`'s extent is centered on the
/// canvas. Floor division, so odd remainders put the extra pixel right/below.
pub fn centered_origin(size: Size, bbox: &TextBox) -> (i32, i32) {
    let x = (size.width as i32).saturating_sub(bbox.width()).div_euclid(2);
    let y = (size.height as i32).saturating_sub(bbox.height()).div_euclid(2);
    (x, y)
}

fn layout<F: Font>(font: &F, scale: PxScale, text: &str, mut f: impl FnMut(OutlinedGlyph)) {
    let scaled = font.as_scaled(scale);
    let mut caret = 0f32;
    let mut prev: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        prev = Some(id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            f(outlined);
        }
    }
}

/// Measure the ink box of `text` set in `font` at `scale`.
pub fn measure_outline<F: Font>(font: &F, scale: PxScale, text: &str) -> TextBox {
    let mut bbox = TextBox::default();
    layout(font, scale, text, |g| {
        let bounds = g.px_bounds();
        let glyph_box = TextBox {
            left: bounds.min.x as i32,
            top: bounds.min.y as i32,
            right: bounds.max.x as i32,
            bottom: bounds.max.y as i32,
        };
        bbox = bbox.union(&glyph_box);
    });
    bbox
}

/// Paint `text` with its origin at `(x, y)`, blending coverage into `img`.
/// Pixels falling outside the canvas are clipped.
pub fn draw_outline<F: Font>(
    img: &mut RgbImage,
    font: &F,
    scale: PxScale,
    color: Color,
    x: i32,
    y: i32,
    text: &str,
) {
    let fill = Rgb(color.channels());
    let (width, height) = (img.width() as i32, img.height() as i32);
    layout(font, scale, text, |g| {
        let bounds = g.px_bounds();
        let ox = x.saturating_add(bounds.min.x as i32);
        let oy = y.saturating_add(bounds.min.y as i32);
        g.draw(|gx, gy, coverage| {
            let px = ox.saturating_add(gx as i32);
            let py = oy.saturating_add(gy as i32);
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let coverage = coverage.clamp(0.0, 1.0);
            let pixel = img.get_pixel_mut(px as u32, py as u32);
            *pixel = weighted_sum(*pixel, fill, 1.0 - coverage, coverage);
        });
    });
}
