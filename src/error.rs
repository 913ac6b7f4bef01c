use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlidedeckError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no slide images found in {0}")]
    NoSlides(PathBuf),
    #[error("failed to load image {path}: {message}")]
    Image { path: PathBuf, message: String },
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),
}

impl SlidedeckError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SlidedeckError>;
