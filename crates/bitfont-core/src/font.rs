//! Font tables: ordered glyph collections plus font-level metadata.

use crate::error::FontError;
use crate::glyph::Glyph;

/// A complete font: metadata plus its glyphs in insertion order.
///
/// Insertion order from the source is authoritative; the table never
/// sorts, rebalances, or deduplicates beyond rejecting a repeated
/// character code. The emitted artifact preserves this order exactly.
#[derive(Debug, Clone)]
pub struct FontTable {
    family: String,
    point_size: u32,
    line_height: u32,
    style: String,
    inverted: bool,
    glyphs: Vec<Glyph>,
}

impl FontTable {
    /// Create an empty table with the given font-level metadata.
    pub fn new(
        family: impl Into<String>,
        point_size: u32,
        line_height: u32,
        style: impl Into<String>,
        inverted: bool,
    ) -> Self {
        Self {
            family: family.into(),
            point_size,
            line_height,
            style: style.into(),
            inverted,
            glyphs: Vec::new(),
        }
    }

    /// Append a glyph, keeping insertion order.
    ///
    /// Rejects a character code already present in the table.
    pub fn push(&mut self, glyph: Glyph) -> Result<(), FontError> {
        if self.glyphs.iter().any(|g| g.code() == glyph.code()) {
            return Err(FontError::DuplicateGlyph(glyph.code()));
        }
        self.glyphs.push(glyph);
        Ok(())
    }

    /// Font family name, e.g. "Terminus".
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Nominal size in pixels.
    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    /// Line advance in pixels.
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Style name, e.g. "Regular".
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Whether the renderer should swap ink and background.
    ///
    /// Metadata only: packed bits always mean "ink observed".
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// The glyphs in insertion order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Live glyph count; never cached.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Deterministic `family_size_style` identifier used for symbol and
    /// file naming.
    ///
    /// Characters that are not valid in a C identifier are replaced with
    /// underscores and the result is ASCII-lowercased. Emitted symbols are
    /// always prefixed, so a leading digit is harmless.
    pub fn short_name(&self) -> String {
        let raw = format!("{}_{}_{}", self.family, self.point_size, self.style);
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}
