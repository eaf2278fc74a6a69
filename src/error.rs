//! Error types for the preview image generator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing the preview image
#[derive(Error, Debug)]
pub enum Error {
    /// The crate was built without an imaging backend
    #[error(
        "imaging support is not available in this build; rebuild with `cargo build --features imaging`"
    )]
    ImagingUnavailable,

    /// A color string could not be parsed
    #[error("Invalid color {0:?}: expected #rrggbb or #rgb")]
    InvalidColor(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The encoder rejected the canvas
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Filesystem error with the path involved
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(feature = "imaging")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}
