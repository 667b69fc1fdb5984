use thiserror::Error;

use crate::state::EditorMode;

/// Errors that can occur during editor mode transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot transition from {from:?} to {to:?}")]
    InvalidTransition { from: EditorMode, to: EditorMode },
}

/// Errors that can occur while turning a file into a displayable image
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Not an image file: {0}")]
    Unsupported(String),

    #[error("Dropped file {0} carries neither a path nor any bytes")]
    NoData(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors that can occur while exporting results
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There are no shapes to export")]
    NothingToExport,

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
