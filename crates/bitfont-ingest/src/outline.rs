//! Outline-font rasterization front-end.
//!
//! Scan conversion is delegated to fontdue; this module binarizes its
//! coverage output and converts baseline-relative metrics into the
//! top-of-line pen offsets the font table stores.

use std::collections::HashSet;

use bitfont_core::{FontTable, Glyph, PixelMask};
use fontdue::{Font, FontSettings};

use crate::error::IngestError;

/// Coverage at or above this level counts as ink.
const COVERAGE_THRESHOLD: u8 = 128;

/// Parse a characters file: every scalar in file order, one glyph per
/// code point. Line terminators are separators, not glyphs, and repeated
/// characters keep their first occurrence.
pub fn parse_char_list(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|&c| c != '\n' && c != '\r')
        .filter(|&c| seen.insert(c))
        .collect()
}

/// Rasterize the requested characters and assemble the font table.
pub fn build_font(
    font_data: &[u8],
    px_size: u32,
    chars: &[char],
    family: &str,
    style: &str,
    inverted: bool,
) -> Result<FontTable, IngestError> {
    let font = Font::from_bytes(font_data, FontSettings::default())
        .map_err(|e| IngestError::Font(e.to_string()))?;
    let line = font
        .horizontal_line_metrics(px_size as f32)
        .ok_or_else(|| IngestError::Font("font has no horizontal line metrics".to_string()))?;
    let ascent = line.ascent.round() as i32;
    let line_height = line.new_line_size.round().max(0.0) as u32;

    let mut table = FontTable::new(family, px_size, line_height, style, inverted);
    for &code in chars {
        let (metrics, coverage) = font.rasterize(code, px_size as f32);
        let mask = PixelMask::from_fn(metrics.width as u32, metrics.height as u32, |x, y| {
            coverage[y as usize * metrics.width + x as usize] >= COVERAGE_THRESHOLD
        });
        // ymin is baseline to bitmap bottom, so the bitmap top sits at
        // height + ymin above the baseline.
        let bitmap_top = metrics.height as i32 + metrics.ymin;
        table.push(Glyph::new(
            code,
            metrics.advance_width.round() as i32,
            metrics.xmin,
            ascent - bitmap_top,
            &mask,
        ))?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_list_keeps_file_order() {
        assert_eq!(parse_char_list("BA9"), vec!['B', 'A', '9']);
    }

    #[test]
    fn test_char_list_skips_line_terminators() {
        assert_eq!(parse_char_list("AB\nCD\r\nE\n"), vec!['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn test_char_list_first_occurrence_wins() {
        assert_eq!(parse_char_list("ABAC\nB"), vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_char_list_keeps_spaces() {
        assert_eq!(parse_char_list("A B"), vec!['A', ' ', 'B']);
    }

    #[test]
    fn test_build_font_rejects_garbage_font() {
        let err = build_font(b"not a font", 12, &['A'], "Test", "Regular", false).unwrap_err();
        assert!(matches!(err, IngestError::Font(_)));
    }
}
