//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::SizePx;
use crate::layout::LayoutError;

/// Errors produced while configuring, composing or persisting assets.
///
/// Everything except the I/O variants is a configuration defect: the same
/// input fails the same way every time, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// No layout is defined for the requested screen name.
    #[error("unknown screen `{0}`")]
    UnknownScreen(String),

    /// A kind or theme name from configuration did not match any variant.
    #[error("unknown {what} `{value}`")]
    UnknownName { what: &'static str, value: String },

    /// A color was configured with the wrong number of channels.
    #[error("color must have 3 or 4 channels, got {0}")]
    InvalidColor(usize),

    /// The same asset name appears twice in one set.
    #[error("duplicate {set} asset `{name}`")]
    DuplicateAsset { set: &'static str, name: String },

    /// A namespace or asset name uses characters outside `[a-z0-9_.-]`.
    #[error("invalid {what} `{value}`: only a-z, 0-9, `_`, `.` and `-` are allowed")]
    InvalidName { what: &'static str, value: String },

    /// An icon was configured with an empty or non-square canvas.
    #[error("icon `{name}` must be square and non-empty, got {size}")]
    InvalidIconSize { name: String, size: SizePx },

    /// A panel entry asked for a canvas size its screen does not have.
    #[error("screen `{screen}` is {expected}, but the catalog asks for {requested}")]
    CanvasSizeMismatch {
        screen: String,
        expected: SizePx,
        requested: SizePx,
    },

    /// A layout failed its geometry invariants.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
