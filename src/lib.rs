//! DushanbeMotion social preview generator
//!
//! Renders the 1200×630 Open Graph card used as the site's link preview: a
//! solid background with the product name centered on it, encoded as JPEG.
//!
//! # Features
//!
//! - **imaging** (default): the raster backend (`image`, `imageproc`,
//!   `ab_glyph`, `font8x8`). Without it, [`run`] fails with
//!   [`Error::ImagingUnavailable`] before touching the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use ogimage::{OgImageConfig, Size};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OgImageConfig {
//!     size: Size { width: 1200, height: 630 },
//!     output_path: "public/og.jpg".into(),
//!     ..Default::default()
//! };
//!
//! let path = ogimage::run(&config)?;
//! println!("Created: {}", path.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod color;
pub mod error;
pub mod rendering;

pub use color::Color;
pub use error::{Error, Result};
pub use rendering::font::{FontChain, FontSource};

/// Configuration for the preview image
///
/// The defaults are the production card: dark green background, white
/// "DushanbeMotion" at 72px, JPEG quality 90, written to `public/og.jpg`.
///
/// # Examples
///
/// ```
/// let cfg = ogimage::OgImageConfig::default();
/// assert_eq!(cfg.size.width, 1200);
/// assert_eq!(cfg.size.height, 630);
/// ```
#[derive(Debug, Clone)]
pub struct OgImageConfig {
    /// Canvas dimensions
    pub size: Size,
    /// Canvas fill
    pub background: Color,
    /// Text drawn at the center of the canvas
    pub text: String,
    /// Text fill
    pub text_color: Color,
    /// Requested font size in pixels
    pub font_size: f32,
    /// Fonts tried in order; always terminated by the built-in face
    pub fonts: FontChain,
    /// JPEG quality, 1..=100
    pub jpeg_quality: u8,
    /// Where the JPEG is written, relative to the working directory
    pub output_path: PathBuf,
}

/// Production background, as written in the site's brand colors
pub const DEFAULT_BACKGROUND: &str = "#0f4f30";
/// Production text fill
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Largest canvas side a baseline JPEG can carry
pub const MAX_DIMENSION: u32 = 65_535;
/// Largest accepted font size in pixels
pub const MAX_FONT_SIZE: f32 = 4096.0;

impl Default for OgImageConfig {
    fn default() -> Self {
        Self {
            size: Size::default(),
            background: Color::rgb(0x0f, 0x4f, 0x30),
            text: "DushanbeMotion".to_string(),
            text_color: Color::rgb(0xff, 0xff, 0xff),
            font_size: 72.0,
            fonts: FontChain::default(),
            jpeg_quality: 90,
            output_path: PathBuf::from("public/og.jpg"),
        }
    }
}

impl OgImageConfig {
    /// Reject values the encoder or rasterizer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if self.size.width > MAX_DIMENSION || self.size.height > MAX_DIMENSION {
            return Err(Error::InvalidConfig(format!(
                "canvas sides must be at most {}, got {}x{}",
                MAX_DIMENSION, self.size.width, self.size.height
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidConfig(format!(
                "jpeg quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.font_size > MAX_FONT_SIZE {
            return Err(Error::InvalidConfig(format!(
                "font size must be at most {}, got {}",
                MAX_FONT_SIZE, self.font_size
            )));
        }
        Ok(())
    }
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
        }
    }
}

/// Whether this build carries the raster backend
pub const fn imaging_available() -> bool {
    cfg!(feature = "imaging")
}

/// Render the card and write it to `config.output_path`.
///
/// Returns the path written. Missing parent directories are created.
#[cfg(feature = "imaging")]
pub fn run(config: &OgImageConfig) -> Result<PathBuf> {
    let image = rendering::render(config)?;
    image.save(&config.output_path)?;
    Ok(config.output_path.clone())
}

/// Without the raster backend there is nothing to do; fail before any I/O.
#[cfg(not(feature = "imaging"))]
pub fn run(_config: &OgImageConfig) -> Result<PathBuf> {
    Err(Error::ImagingUnavailable)
}
