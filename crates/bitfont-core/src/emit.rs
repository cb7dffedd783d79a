//! C source and header emission for packed font tables.
//!
//! Emission is pure string building over an assembled [`FontTable`]; the
//! caller decides where the text lands. Each non-empty pixmap becomes a
//! `uint8_t` array preceded by its ASCII-art preview, followed by the
//! glyph table and the font record the bitfont runtime consumes.

use crate::font::FontTable;
use crate::glyph::Glyph;
use crate::pixmap::PackedPixmap;

/// Bytes rendered per line in emitted pixmap arrays.
const BYTES_PER_LINE: usize = 12;

/// The rendered artifact pair for one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// C source text (`.c`).
    pub source: String,
    /// Matching header text (`.h`).
    pub header: String,
}

/// Render the source/header artifact pair for a font table.
pub fn emit(font: &FontTable) -> Artifacts {
    Artifacts {
        source: emit_source(font),
        header: emit_header(font),
    }
}

/// Escape a character for a single-quoted C literal.
///
/// Apostrophe, backslash and double quote take a backslash; every other
/// code point is written through literally.
pub fn escape_char(code: char) -> String {
    match code {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        c => c.to_string(),
    }
}

fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}

fn pixmap_symbol(short: &str, index: usize) -> String {
    format!("font_{}_px{}", short, index)
}

fn emit_source(font: &FontTable) -> String {
    let short = font.short_name();
    let mut out = String::new();

    out.push_str("/* Generated by bitfontgen. Do not edit. */\n\n");
    out.push_str("#include \"bitfont.h\"\n");

    for (index, glyph) in font.glyphs().iter().enumerate() {
        if let Some(pixmap) = glyph.pixmap() {
            out.push('\n');
            emit_pixmap_comment(&mut out, glyph, pixmap);
            emit_pixmap_array(&mut out, &pixmap_symbol(&short, index), pixmap);
        }
    }

    // An empty initializer list is not valid C; a glyphless font gets a
    // NULL table instead.
    let table_ref = if font.glyph_count() == 0 {
        "NULL".to_string()
    } else {
        out.push('\n');
        out.push_str(&format!(
            "static const bitfont_glyph_t font_{}_glyphs[] = {{\n",
            short
        ));
        for (index, glyph) in font.glyphs().iter().enumerate() {
            emit_glyph_entry(&mut out, &short, index, glyph);
        }
        out.push_str("};\n");
        format!("font_{}_glyphs", short)
    };

    out.push('\n');
    out.push_str(&format!("const bitfont_t font_{} = {{\n", short));
    out.push_str(&format!(
        "    .family = \"{}\",\n",
        escape_str(font.family())
    ));
    out.push_str(&format!("    .size = {},\n", font.point_size()));
    out.push_str(&format!("    .height = {},\n", font.line_height()));
    out.push_str(&format!("    .style = \"{}\",\n", escape_str(font.style())));
    out.push_str(&format!("    .inverted = {},\n", font.inverted()));
    out.push_str(&format!("    .glyph_count = {},\n", font.glyph_count()));
    out.push_str(&format!("    .glyphs = {},\n", table_ref));
    out.push_str("};\n");

    out
}

fn emit_pixmap_comment(out: &mut String, glyph: &Glyph, pixmap: &PackedPixmap) {
    out.push_str(&format!(
        "/* '{}' {}x{}\n",
        escape_char(glyph.code()),
        pixmap.width(),
        pixmap.height()
    ));
    for row in pixmap.preview() {
        out.push_str(" * ");
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(" */\n");
}

fn emit_pixmap_array(out: &mut String, symbol: &str, pixmap: &PackedPixmap) {
    out.push_str(&format!("static const uint8_t {}[] = {{\n", symbol));
    for line in pixmap.bytes().chunks(BYTES_PER_LINE) {
        out.push_str("   ");
        for byte in line {
            out.push_str(&format!(" 0x{:02X},", byte));
        }
        out.push('\n');
    }
    out.push_str("};\n");
}

fn emit_glyph_entry(out: &mut String, short: &str, index: usize, glyph: &Glyph) {
    let (width, height, pixmap_ref) = match glyph.pixmap() {
        Some(pixmap) => (
            pixmap.width(),
            pixmap.height(),
            pixmap_symbol(short, index),
        ),
        None => (0, 0, "NULL".to_string()),
    };
    out.push_str(&format!(
        "    {{ .code = L'{}', .advance = {}, .offset_x = {}, .offset_y = {},\n",
        escape_char(glyph.code()),
        glyph.advance(),
        glyph.offset_x(),
        glyph.offset_y()
    ));
    out.push_str(&format!(
        "      .width = {}, .height = {}, .pixmap = {} }},\n",
        width, height, pixmap_ref
    ));
}

fn emit_header(font: &FontTable) -> String {
    let short = font.short_name();
    let guard = format!("BITFONT_{}_H", short.to_ascii_uppercase());
    let mut out = String::new();
    out.push_str("/* Generated by bitfontgen. Do not edit. */\n\n");
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str("#include \"bitfont.h\"\n\n");
    out.push_str(&format!("extern const bitfont_t font_{};\n\n", short));
    out.push_str(&format!("#endif /* {} */\n", guard));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::PixelMask;
    use pretty_assertions::assert_eq;

    fn sample_font() -> FontTable {
        let mut font = FontTable::new("Test", 8, 10, "Regular", false);
        let mask = PixelMask::new(
            8,
            1,
            vec![true, false, true, false, true, false, true, false],
        );
        font.push(Glyph::new('B', 6, 0, 1, &mask)).unwrap();
        font.push(Glyph::new('A', 6, 0, 1, &mask)).unwrap();
        font.push(Glyph::new(' ', 4, 0, 0, &PixelMask::empty()))
            .unwrap();
        font
    }

    #[test]
    fn test_escape_char_specials() {
        assert_eq!(escape_char('\''), "\\'");
        assert_eq!(escape_char('\\'), "\\\\");
        assert_eq!(escape_char('"'), "\\\"");
    }

    #[test]
    fn test_escape_char_passthrough() {
        assert_eq!(escape_char('A'), "A");
        assert_eq!(escape_char('~'), "~");
        assert_eq!(escape_char('ž'), "ž");
    }

    #[test]
    fn test_source_preserves_insertion_order() {
        let artifacts = emit(&sample_font());
        let b = artifacts.source.find("L'B'").unwrap();
        let a = artifacts.source.find("L'A'").unwrap();
        assert!(b < a, "glyph table must keep insertion order");
    }

    #[test]
    fn test_source_emits_packed_bytes_and_preview() {
        let artifacts = emit(&sample_font());
        assert!(artifacts.source.contains("0x55,"));
        assert!(artifacts.source.contains(" * # # # # \n"));
    }

    #[test]
    fn test_empty_glyph_emits_null_sentinel() {
        let artifacts = emit(&sample_font());
        assert!(artifacts
            .source
            .contains(".width = 0, .height = 0, .pixmap = NULL"));
        // No array symbol exists for the empty glyph (insertion index 2).
        assert!(!artifacts.source.contains("font_test_8_regular_px2"));
    }

    #[test]
    fn test_glyph_count_matches_live_collection() {
        let mut font = FontTable::new("Test", 8, 10, "Regular", false);
        let empty = emit(&font).source;
        assert!(empty.contains(".glyph_count = 0,"));
        assert!(empty.contains(".glyphs = NULL,"));

        let mask = PixelMask::new(1, 1, vec![true]);
        font.push(Glyph::new('A', 2, 0, 0, &mask)).unwrap();
        assert!(emit(&font).source.contains(".glyph_count = 1,"));

        font.push(Glyph::new('B', 2, 0, 0, &mask)).unwrap();
        font.push(Glyph::new('C', 2, 0, 0, &mask)).unwrap();
        assert!(emit(&font).source.contains(".glyph_count = 3,"));
    }

    #[test]
    fn test_header_guard_from_short_name() {
        let artifacts = emit(&sample_font());
        assert!(artifacts.header.starts_with("/* Generated by bitfontgen."));
        assert!(artifacts.header.contains("#ifndef BITFONT_TEST_8_REGULAR_H"));
        assert!(artifacts.header.contains("#define BITFONT_TEST_8_REGULAR_H"));
        assert!(artifacts
            .header
            .contains("extern const bitfont_t font_test_8_regular;"));
        assert!(artifacts
            .header
            .ends_with("#endif /* BITFONT_TEST_8_REGULAR_H */\n"));
    }

    #[test]
    fn test_escaped_code_in_glyph_table() {
        let mut font = FontTable::new("Test", 8, 10, "Regular", false);
        let mask = PixelMask::new(1, 1, vec![true]);
        font.push(Glyph::new('\'', 2, 0, 0, &mask)).unwrap();
        font.push(Glyph::new('\\', 2, 0, 0, &mask)).unwrap();
        let artifacts = emit(&font);
        assert!(artifacts.source.contains("L'\\''"));
        assert!(artifacts.source.contains("L'\\\\'"));
    }

    #[test]
    fn test_emit_deterministic() {
        let font = sample_font();
        assert_eq!(emit(&font), emit(&font));
    }

    #[test]
    fn test_inverted_flag_carried_as_metadata() {
        let font = FontTable::new("Test", 8, 10, "Regular", true);
        assert!(emit(&font).source.contains(".inverted = true,"));
    }
}
