//! Font selection with an ordered fallback chain
//!
//! A `FontChain` is tried front to back. File sources that are missing,
//! unreadable or not a parseable font are skipped; the chain always ends in
//! the built-in bitmap face, so loading never fails.

use std::path::PathBuf;

/// Where a font may come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType file (collections use their first face)
    File(PathBuf),
    /// The built-in 8x8 bitmap face
    Builtin,
}

/// Ordered list of font sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChain {
    sources: Vec<FontSource>,
}

impl FontChain {
    /// Build a chain; a trailing `Builtin` is appended when missing.
    pub fn new(sources: impl IntoIterator<Item = FontSource>) -> Self {
        let mut sources: Vec<FontSource> = sources.into_iter().collect();
        if sources.last() != Some(&FontSource::Builtin) {
            sources.push(FontSource::Builtin);
        }
        Self { sources }
    }

    /// A chain that goes straight to the built-in face
    pub fn builtin_only() -> Self {
        Self::new([FontSource::Builtin])
    }

    pub fn sources(&self) -> &[FontSource] {
        &self.sources
    }
}

impl Default for FontChain {
    /// Arial first, then Helvetica, then DejaVu Sans, then the built-in face.
    fn default() -> Self {
        let files = [
            "arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ];
        Self::new(files.into_iter().map(|p| FontSource::File(PathBuf::from(p))))
    }
}

#[cfg(feature = "imaging")]
pub use loaded::LoadedFont;

#[cfg(feature = "imaging")]
mod loaded {
    use super::{FontChain, FontSource};
    use crate::rendering::bitmap::BitmapFace;
    use crate::rendering::text::{self, TextBox};
    use crate::Color;
    use ab_glyph::{FontVec, PxScale};
    use image::RgbImage;
    use std::path::{Path, PathBuf};

    /// A face ready to measure and draw at a fixed size
    pub enum LoadedFont {
        Outline {
            font: FontVec,
            scale: PxScale,
            path: PathBuf,
        },
        Bitmap(BitmapFace),
    }

    impl std::fmt::Debug for LoadedFont {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LoadedFont::Outline { scale, path, .. } => f
                    .debug_struct("Outline")
                    .field("path", path)
                    .field("scale", &scale.y)
                    .finish(),
                LoadedFont::Bitmap(face) => f.debug_tuple("Bitmap").field(face).finish(),
            }
        }
    }

    fn load_file(path: &Path) -> Option<FontVec> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("font {} unavailable: {}", path.display(), e);
                return None;
            }
        };
        match FontVec::try_from_vec_and_index(data, 0) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("font {} could not be parsed: {}", path.display(), e);
                None
            }
        }
    }

    impl FontChain {
        /// Load the first usable source at `px_size`.
        pub fn load(&self, px_size: f32) -> LoadedFont {
            for source in &self.sources {
                match source {
                    FontSource::File(path) => {
                        if let Some(font) = load_file(path) {
                            return LoadedFont::Outline {
                                font,
                                scale: PxScale::from(px_size),
                                path: path.clone(),
                            };
                        }
                    }
                    FontSource::Builtin => break,
                }
            }
            LoadedFont::Bitmap(BitmapFace::for_size(px_size))
        }
    }

    impl LoadedFont {
        pub fn is_builtin(&self) -> bool {
            matches!(self, LoadedFont::Bitmap(_))
        }

        pub fn describe(&self) -> String {
            match self {
                LoadedFont::Outline { path, scale, .. } => {
                    format!("{} at {}px", path.display(), scale.y)
                }
                LoadedFont::Bitmap(face) => format!("built-in bitmap face x{}", face.scale),
            }
        }

        pub fn measure(&self, s: &str) -> TextBox {
            match self {
                LoadedFont::Outline { font, scale, .. } => text::measure_outline(font, *scale, s),
                LoadedFont::Bitmap(face) => face.measure(s),
            }
        }

        /// Draw with the line origin at `(x, y)`.
        pub fn draw(&self, img: &mut RgbImage, color: Color, x: i32, y: i32, s: &str) {
            match self {
                LoadedFont::Outline { font, scale, .. } => {
                    text::draw_outline(img, font, *scale, color, x, y, s)
                }
                LoadedFont::Bitmap(face) => face.draw(img, color, x, y, s),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_always_ends_in_builtin() {
        let chain = FontChain::new([FontSource::File("a.ttf".into())]);
        assert_eq!(chain.sources().last(), Some(&FontSource::Builtin));
        assert_eq!(chain.sources().len(), 2);

        let chain = FontChain::new(Vec::new());
        assert_eq!(chain.sources(), &[FontSource::Builtin]);

        assert_eq!(FontChain::builtin_only().sources().len(), 1);
    }

    #[test]
    fn default_chain_prefers_arial() {
        let chain = FontChain::default();
        assert_eq!(chain.sources()[0], FontSource::File("arial.ttf".into()));
        assert!(chain
            .sources()
            .contains(&FontSource::File("/System/Library/Fonts/Helvetica.ttc".into())));
        assert_eq!(chain.sources().last(), Some(&FontSource::Builtin));
    }

    #[cfg(feature = "imaging")]
    #[test]
    fn missing_and_invalid_files_fall_back_to_builtin() {
        let bogus = std::env::temp_dir().join(format!("ogimage-bogus-{}.ttf", std::process::id()));
        std::fs::write(&bogus, b"not a font").unwrap();

        let chain = FontChain::new([
            FontSource::File("/nonexistent/ogimage/arial.ttf".into()),
            FontSource::File(bogus.clone()),
        ]);
        let face = chain.load(72.0);
        assert!(face.is_builtin());
        assert!(face.describe().contains("x9"));

        std::fs::remove_file(&bogus).ok();
    }

    #[cfg(feature = "imaging")]
    #[test]
    fn builtin_stops_the_chain() {
        let chain = FontChain::new([FontSource::Builtin, FontSource::File("arial.ttf".into())]);
        assert!(chain.load(16.0).is_builtin());
    }
}
