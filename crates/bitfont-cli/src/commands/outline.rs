//! Outline front-end command: scalable font + character list.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use bitfont_core::emit;
use bitfont_ingest::{outline, IngestError};
use colored::Colorize;

use super::{fallback_base, finish, Outcome};
use crate::output;
use crate::report::FontSummary;

/// Run the outline command.
///
/// # Arguments
/// * `font_path` - Path to the outline font (TTF/OTF)
/// * `size` - Pixel size to rasterize at
/// * `chars_path` - Text file listing the characters to include
/// * `output_base` - Output base path (default: the font's short name)
/// * `family` - Family name override (default: font file stem)
/// * `style` - Style name recorded in the table
/// * `invert` - Record the font as color-inverted for the renderer
///
/// # Returns
/// Exit code: 0 success, 1 I/O failure, 2 descriptor failure, 3 other
#[allow(clippy::too_many_arguments)]
pub fn run(
    font_path: &str,
    size: u32,
    chars_path: &str,
    output_base: Option<&str>,
    family: Option<&str>,
    style: &str,
    invert: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let failure_base = output_base
        .map(str::to_string)
        .unwrap_or_else(|| fallback_base(font_path));

    let result = generate(
        font_path,
        size,
        chars_path,
        output_base,
        family,
        style,
        invert,
    );
    finish(result, &failure_base, start)
}

fn generate(
    font_path: &str,
    size: u32,
    chars_path: &str,
    output_base: Option<&str>,
    family: Option<&str>,
    style: &str,
    invert: bool,
) -> Result<Outcome> {
    println!("{} {}", "Reading character list:".cyan().bold(), chars_path);
    let chars_text =
        fs::read_to_string(chars_path).map_err(|e| IngestError::io(chars_path, e))?;
    let chars = outline::parse_char_list(&chars_text);

    println!(
        "{} {} at {}px",
        "Rasterizing:".cyan().bold(),
        font_path,
        size
    );
    let font_data = fs::read(font_path).map_err(|e| IngestError::io(font_path, e))?;
    let family = family
        .map(str::to_string)
        .unwrap_or_else(|| font_file_stem(font_path));

    let font = outline::build_font(&font_data, size, &chars, &family, style, invert)?;
    for glyph in font.glyphs() {
        match glyph.pixmap() {
            Some(pixmap) => println!(
                "  {} '{}' {}x{}",
                "+".green(),
                emit::escape_char(glyph.code()),
                pixmap.width(),
                pixmap.height()
            ),
            None => println!(
                "  {} '{}' (empty)",
                "+".green(),
                emit::escape_char(glyph.code())
            ),
        }
    }

    let base = output_base
        .map(str::to_string)
        .unwrap_or_else(|| font.short_name());

    let artifacts = emit::emit(&font);
    let (source, header) = output::artifact_paths(&base);
    output::write_artifacts(&artifacts, &source, &header)?;

    Ok(Outcome {
        summary: FontSummary::from_table(&font),
        source,
        header,
    })
}

fn font_file_stem(font_path: &str) -> String {
    Path::new(font_path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("font")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_file_stem() {
        assert_eq!(font_file_stem("fonts/DejaVuSans.ttf"), "DejaVuSans");
        assert_eq!(font_file_stem("plain"), "plain");
    }

    #[test]
    fn test_outline_run_missing_chars_file_is_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("out");
        let code = run(
            "nonexistent.ttf",
            12,
            tmp.path().join("missing.txt").to_str().unwrap(),
            base.to_str(),
            None,
            "Regular",
            false,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!tmp.path().join("out.c").exists());
    }

    #[test]
    fn test_outline_run_garbage_font_is_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let chars = tmp.path().join("chars.txt");
        fs::write(&chars, "AB").unwrap();
        let bogus = tmp.path().join("bogus.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();

        let base = tmp.path().join("out");
        let code = run(
            bogus.to_str().unwrap(),
            12,
            chars.to_str().unwrap(),
            base.to_str(),
            None,
            "Regular",
            false,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!tmp.path().join("out.c").exists());

        let report: crate::report::RunReport = serde_json::from_str(
            &fs::read_to_string(tmp.path().join("out.report.json")).unwrap(),
        )
        .unwrap();
        assert!(!report.ok);
        assert_eq!(report.error.unwrap().exit_code, 1);
    }
}
