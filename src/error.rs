//! Errors returned by the splash widget.

use std::path::PathBuf;

use splash_common::ConfigError;
use thiserror::Error;

pub type Result<T, E = SplashError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SplashError {
    /// An option or property was given the wrong type or an unusable value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read splash image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode splash image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The detected screen is too small for a window a third of its size.
    #[error("screen {width}x{height} is too small for a splash window")]
    ScreenTooSmall { width: u32, height: u32 },

    /// The windowing backend failed (SDL reports errors as strings).
    #[error("display error: {0}")]
    Display(String),

    /// The splash that owned this handle has been dropped.
    #[error("splash screen is gone")]
    Disconnected,
}

impl SplashError {
    pub(crate) fn display(err: impl std::fmt::Display) -> Self { Self::Display(err.to_string()) }
}
