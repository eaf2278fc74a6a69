//! Canvas allocation

use crate::{Color, Size};
use image::{Rgb, RgbImage};

/// Allocate an RGB canvas of `size` filled with `background`.
pub fn new_canvas(size: Size, background: Color) -> RgbImage {
    RgbImage::from_pixel(size.width, size.height, Rgb(background.channels()))
}
