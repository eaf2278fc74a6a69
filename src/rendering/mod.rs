//! Rendering pipeline: canvas, font selection, text placement, encoding

pub mod font;
pub mod svg;

#[cfg(feature = "imaging")]
pub mod bitmap;
#[cfg(feature = "imaging")]
pub mod canvas;
#[cfg(feature = "imaging")]
pub mod encode;
#[cfg(feature = "imaging")]
pub mod text;

#[cfg(feature = "imaging")]
pub use imaging::{render, render_canvas};

/// A rendered preview image
#[derive(Debug, Clone)]
pub struct OgImage {
    pub width: u32,
    pub height: u32,
    pub jpeg_data: Vec<u8>,
    /// Hex SHA-256 of the raw RGB canvas before encoding
    pub pixel_digest: String,
}

impl OgImage {
    /// Write the JPEG bytes to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| crate::Error::io(parent, e))?;
        }
        std::fs::write(path, &self.jpeg_data).map_err(|e| crate::Error::io(path, e))?;
        log::info!("wrote {} bytes to {}", self.jpeg_data.len(), path.display());
        Ok(())
    }
}

/// Hex SHA-256 over a raw pixel buffer
pub fn digest_pixels(raw: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(raw))
}

#[cfg(feature = "imaging")]
mod imaging {
    use super::{canvas, encode, text, OgImage};
    use crate::{OgImageConfig, Result};
    use image::RgbImage;

    /// Draw the card into a fresh canvas without encoding it.
    pub fn render_canvas(config: &OgImageConfig) -> Result<RgbImage> {
        config.validate()?;
        let mut img = canvas::new_canvas(config.size, config.background);
        let face = config.fonts.load(config.font_size);
        log::debug!("using {} for {:?}", face.describe(), config.text);

        let bbox = face.measure(&config.text);
        let (x, y) = text::centered_origin(config.size, &bbox);
        face.draw(
            &mut img,
            config.text_color,
            x.saturating_sub(bbox.left),
            y.saturating_sub(bbox.top),
            &config.text,
        );
        Ok(img)
    }

    /// Render the card and encode it as JPEG.
    pub fn render(config: &OgImageConfig) -> Result<OgImage> {
        let img = render_canvas(config)?;
        let pixel_digest = super::digest_pixels(img.as_raw());
        let jpeg_data = encode::encode_jpeg(&img, config.jpeg_quality)?;
        log::info!(
            "rendered {}x{} preview ({} bytes, canvas sha256 {})",
            img.width(),
            img.height(),
            jpeg_data.len(),
            &pixel_digest[..12]
        );
        Ok(OgImage {
            width: img.width(),
            height: img.height(),
            jpeg_data,
            pixel_digest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_hex() {
        let d = digest_pixels(&[0u8; 3]);
        assert_eq!(d.len(), 64);
        assert_eq!(d, digest_pixels(&[0u8; 3]));
        assert_ne!(d, digest_pixels(&[1u8; 3]));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("ogimage-save-{}", std::process::id()));
        let path = dir.join("nested").join("og.jpg");
        let img = OgImage {
            width: 1,
            height: 1,
            jpeg_data: vec![0xff, 0xd8, 0xff],
            pixel_digest: String::new(),
        };
        img.save(&path).expect("save");
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xd8, 0xff]);
        std::fs::remove_dir_all(&dir).ok();
    }
}
