//! Error types for the ingestion front-ends.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a glyph source into a font table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed descriptor content: missing attribute, bad token count,
    /// non-numeric field, out-of-bounds rect.
    #[error("descriptor error: {0}")]
    Descriptor(String),

    /// XML syntax error in the descriptor file.
    #[error("descriptor parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The glyph sheet image could not be read or decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The outline font could not be parsed or offers no usable metrics.
    #[error("font error: {0}")]
    Font(String),

    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assembled table rejected a glyph.
    #[error(transparent)]
    Table(#[from] bitfont_core::FontError),
}

impl IngestError {
    /// Wrap a read failure with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
