//! JPEG encoding

use crate::Result;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

/// Encode `img` as baseline JPEG at `quality` (1..=100).
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder.encode_image(img)?;
    Ok(out)
}
