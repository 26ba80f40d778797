use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while rendering and writing icons.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon slot '{slot}' has size 0")]
    InvalidSize { slot: String },

    #[error("PNG support unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {path}: {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}", path = path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IconError>;
