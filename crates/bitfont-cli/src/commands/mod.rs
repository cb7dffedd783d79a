//! Command implementations for the bitfontgen binary.

pub mod image;
pub mod outline;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use bitfont_ingest::IngestError;
use colored::Colorize;

use crate::report::{self, FontSummary, RunReport};

/// Exit code for input/output I/O failures.
pub const EXIT_IO: u8 = 1;
/// Exit code for descriptor failures (syntax, format, duplicate codes).
pub const EXIT_DESCRIPTOR: u8 = 2;
/// Exit code for unclassified failures.
pub const EXIT_OTHER: u8 = 3;

/// What a successful generation produced.
pub(crate) struct Outcome {
    pub summary: FontSummary,
    pub source: PathBuf,
    pub header: PathBuf,
}

/// Map a failure to its exit code.
///
/// Descriptor problems (including a duplicate glyph code) are `2`,
/// anything that reduces to a file or decode failure is `1`, the rest is
/// the unclassified `3`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if let Some(ingest) = err.downcast_ref::<IngestError>() {
        return match ingest {
            IngestError::Descriptor(_) | IngestError::Xml(_) | IngestError::Table(_) => {
                EXIT_DESCRIPTOR
            }
            IngestError::Image(_) | IngestError::Font(_) | IngestError::Io { .. } => EXIT_IO,
        };
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return EXIT_IO;
    }
    EXIT_OTHER
}

/// Print the result, write the run report, and translate to an exit code.
///
/// On success the report sits next to the artifacts; on failure it falls
/// back to `failure_base`, derived from the input, so the diagnostic
/// record exists even when no artifact path was ever resolved.
pub(crate) fn finish(
    result: Result<Outcome>,
    failure_base: &str,
    start: Instant,
) -> Result<ExitCode> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(outcome) => {
            let outputs = vec![
                outcome.source.display().to_string(),
                outcome.header.display().to_string(),
            ];
            println!("{} {}", "Source:".dimmed(), outputs[0]);
            println!("{} {}", "Header:".dimmed(), outputs[1]);

            let base = outputs[0]
                .strip_suffix(".c")
                .unwrap_or(&outputs[0])
                .to_string();
            let glyph_count = outcome.summary.glyph_count;
            let report = RunReport::success(outcome.summary, outputs, duration_ms);
            report::write_report(&report, &report::report_path(&base))?;

            println!(
                "\n{} {} glyph(s) packed ({}ms)",
                "SUCCESS".green().bold(),
                glyph_count,
                duration_ms
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            let code = exit_code_for(&err);

            let report = RunReport::failure(format!("{:#}", err), code, duration_ms);
            if let Err(report_err) =
                report::write_report(&report, &report::report_path(failure_base))
            {
                eprintln!("{} {:#}", "warning:".yellow(), report_err);
            }

            println!("\n{} ({}ms)", "FAILED".red().bold(), duration_ms);
            Ok(ExitCode::from(code))
        }
    }
}

/// Fallback report base for runs that fail before an output base exists:
/// the input file's stem, next to the input.
pub(crate) fn fallback_base(input: &str) -> String {
    let path = std::path::Path::new(input);
    path.with_extension("")
        .to_string_lossy()
        .into_owned()
}
