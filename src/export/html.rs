//! HTML export.
//!
//! Renders bookmark content and moves it between files. Rendering itself
//! cannot fail; only the file operations return errors.

use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::render::{render_body, render_markdown};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// File stem used when the content has no source file (stdin).
const DEFAULT_STEM: &str = "bookmark";

/// Render `markdown` in the requested format.
pub fn render_export(markdown: Option<&str>, format: ExportFormat) -> String {
    match format {
        ExportFormat::Document => render_markdown(markdown),
        ExportFormat::Fragment => render_body(markdown.unwrap_or_default()),
    }
}

/// Read bookmark content from `path`.
pub fn read_markdown(path: &Path) -> Result<String> {
    debug!("Reading content from {}", path.display());
    fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a rendered document to `output`, creating parent directories.
pub fn write_html(output: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output, html).map_err(|source| Error::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Wrote {} bytes to {}", html.len(), output.display());
    Ok(())
}

/// Render the Markdown file at `source_path` into `output_path`.
pub fn export_to_html_file(
    source_path: &Path,
    output_path: &Path,
    format: ExportFormat,
) -> Result<()> {
    ensure_distinct_paths(source_path, output_path)?;
    let markdown = read_markdown(source_path)?;
    let html = render_export(Some(&markdown), format);
    write_html(output_path, &html)
}

/// Refuse an export whose output would replace its own source file.
///
/// Paths that both exist are compared after canonicalization, so
/// `./note.md` and `note.md` are the same file.
pub fn ensure_distinct_paths(source_path: &Path, output_path: &Path) -> Result<()> {
    let same = match (source_path.canonicalize(), output_path.canonicalize()) {
        (Ok(source), Ok(output)) => source == output,
        _ => source_path == output_path,
    };
    if same {
        return Err(Error::Application(format!(
            "Refusing to overwrite input '{}' with rendered HTML",
            source_path.display()
        )));
    }
    Ok(())
}

/// Output path for a document exported into `dir`.
///
/// Uses the source file's stem, or `bookmark` when there is no source.
pub fn default_output_path(source: Option<&Path>, dir: &Path, format: ExportFormat) -> PathBuf {
    let stem = source
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_STEM);
    dir.join(format!("{}.{}", stem, format.extension()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
