//! Artifact path derivation and all-or-nothing writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bitfont_core::Artifacts;

/// Resolve the source/header pair for an output base.
///
/// A base already ending in `.c` is taken as the source path with the
/// header alongside; otherwise `.c` and `.h` are appended to the base as
/// given, so a user-supplied extension is kept rather than replaced.
pub fn artifact_paths(base: &str) -> (PathBuf, PathBuf) {
    match base.strip_suffix(".c") {
        Some(stem) => (PathBuf::from(base), PathBuf::from(format!("{}.h", stem))),
        None => (
            PathBuf::from(format!("{}.c", base)),
            PathBuf::from(format!("{}.h", base)),
        ),
    }
}

/// Write the rendered artifact pair.
///
/// Both texts are fully rendered before this is called, so a failed run
/// never leaves a partial glyph table on disk.
pub fn write_artifacts(artifacts: &Artifacts, source: &Path, header: &Path) -> Result<()> {
    fs::write(source, &artifacts.source)
        .with_context(|| format!("failed to write {}", source.display()))?;
    fs::write(header, &artifacts.header)
        .with_context(|| format!("failed to write {}", header.display()))?;
    Ok(())
}
