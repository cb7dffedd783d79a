//! Error types for font table assembly.

use thiserror::Error;

/// Errors raised while assembling a font table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    /// A second glyph was inserted for a character already in the table.
    #[error("duplicate glyph for character {0:?}")]
    DuplicateGlyph(char),
}
