//! Errors for configuration loading and image sampling.
//!
//! Palette generation itself is infallible: bad colors degrade to black and
//! harmony overflow degrades to even spacing. Only I/O-facing entry points
//! return [`ThemeError`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML configuration")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON configuration")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode image")]
    Image(#[from] image::ImageError),

    #[error("sample region of `{}` contains no pixels", path.display())]
    EmptyImage { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
