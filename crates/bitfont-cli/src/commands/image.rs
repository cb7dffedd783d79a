//! Image front-end command: glyph sheet + XML descriptor.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use bitfont_core::emit;
use bitfont_ingest::{parse_descriptor, sheet, IngestError};
use colored::Colorize;

use super::{fallback_base, finish, Outcome};
use crate::output;
use crate::report::FontSummary;

/// Run the image command.
///
/// # Arguments
/// * `image_path` - Path to the glyph sheet image
/// * `descriptor_path` - Path to the XML descriptor
/// * `output_base` - Output base path (default: the font's short name)
/// * `invert` - Record the font as color-inverted for the renderer
///
/// # Returns
/// Exit code: 0 success, 1 I/O failure, 2 descriptor failure, 3 other
pub fn run(
    image_path: &str,
    descriptor_path: &str,
    output_base: Option<&str>,
    invert: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let failure_base = output_base
        .map(str::to_string)
        .unwrap_or_else(|| fallback_base(descriptor_path));

    let result = generate(image_path, descriptor_path, output_base, invert);
    finish(result, &failure_base, start)
}

fn generate(
    image_path: &str,
    descriptor_path: &str,
    output_base: Option<&str>,
    invert: bool,
) -> Result<Outcome> {
    println!("{} {}", "Reading descriptor:".cyan().bold(), descriptor_path);
    let text = fs::read_to_string(descriptor_path)
        .map_err(|e| IngestError::io(descriptor_path, e))?;
    let descriptor = parse_descriptor(&text)?;

    println!("{} {}", "Reading glyph sheet:".cyan().bold(), image_path);
    let glyph_sheet = sheet::load_sheet(Path::new(image_path))?;

    let font = sheet::build_font(&descriptor, &glyph_sheet, invert)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    const DESCRIPTOR: &str = r#"
        <Font family="Tiny" size="4" height="5" style="Regular">
            <Char width="3" offset="0 0" rect="0 0 2 2" code="B"/>
            <Char width="3" offset="0 1" rect="2 0 2 2" code="A"/>
            <Char width="2" offset="0 0" rect="0 0 0 0" code=" "/>
        </Font>
    "#;

    fn write_inputs(dir: &Path) -> (String, String) {
        let sheet_path = dir.join("sheet.png");
        let sheet = GrayImage::from_fn(4, 2, |x, y| Luma([if (x + y) % 2 == 0 { 255 } else { 0 }]));
        sheet.save(&sheet_path).unwrap();

        let descriptor_path = dir.join("tiny.xml");
        fs::write(&descriptor_path, DESCRIPTOR).unwrap();

        (
            sheet_path.to_string_lossy().into_owned(),
            descriptor_path.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn test_image_run_writes_artifact_pair_and_report() {
        let tmp = tempfile::tempdir().unwrap();
        let (sheet_path, descriptor_path) = write_inputs(tmp.path());
        let base = tmp.path().join("tiny_font");
        let base_str = base.to_string_lossy().into_owned();

        let code = run(&sheet_path, &descriptor_path, Some(&base_str), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let source = fs::read_to_string(tmp.path().join("tiny_font.c")).unwrap();
        assert!(source.contains("const bitfont_t font_tiny_4_regular"));
        assert!(source.contains(".glyph_count = 3,"));
        // Insertion order preserved: B before A.
        assert!(source.find("L'B'").unwrap() < source.find("L'A'").unwrap());
        // Empty glyph resolves to the null sentinel.
        assert!(source.contains(".pixmap = NULL"));

        let header = fs::read_to_string(tmp.path().join("tiny_font.h")).unwrap();
        assert!(header.contains("#ifndef BITFONT_TINY_4_REGULAR_H"));

        let report: crate::report::RunReport = serde_json::from_str(
            &fs::read_to_string(tmp.path().join("tiny_font.report.json")).unwrap(),
        )
        .unwrap();
        assert!(report.ok);
        assert_eq!(report.font.unwrap().glyph_count, 3);
        assert_eq!(report.outputs.len(), 2);
    }

    #[test]
    fn test_image_run_missing_descriptor_is_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("out");
        let code = run(
            "nonexistent.png",
            tmp.path().join("missing.xml").to_str().unwrap(),
            base.to_str(),
            false,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(1));
        // No artifacts were written.
        assert!(!tmp.path().join("out.c").exists());
        assert!(!tmp.path().join("out.h").exists());
    }

    #[test]
    fn test_image_run_bad_descriptor_is_parse_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let (sheet_path, _) = write_inputs(tmp.path());

        let bad = tmp.path().join("bad.xml");
        fs::write(
            &bad,
            r#"<Font family="F" size="4" height="5" style="R">
                <Char width="3" offset="0" rect="0 0 2 2" code="A"/>
            </Font>"#,
        )
        .unwrap();

        let base = tmp.path().join("out");
        let code = run(&sheet_path, bad.to_str().unwrap(), base.to_str(), false).unwrap();
        assert_eq!(code, ExitCode::from(2));
        assert!(!tmp.path().join("out.c").exists());

        // The failure still leaves a structured report.
        let report: crate::report::RunReport = serde_json::from_str(
            &fs::read_to_string(tmp.path().join("out.report.json")).unwrap(),
        )
        .unwrap();
        assert!(!report.ok);
        assert_eq!(report.error.unwrap().exit_code, 2);
    }

    #[test]
    fn test_image_run_inverted_flag_reaches_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let (sheet_path, descriptor_path) = write_inputs(tmp.path());
        let base = tmp.path().join("inv");

        let code = run(&sheet_path, &descriptor_path, base.to_str(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let source = fs::read_to_string(tmp.path().join("inv.c")).unwrap();
        assert!(source.contains(".inverted = true,"));
    }
}
