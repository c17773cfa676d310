//! Export options and configuration.

use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// What an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Complete HTML document with the embedded stylesheet
    #[default]
    Document,
    /// Body fragment only, for embedding into another page
    Fragment,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        "html"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Options
// ─────────────────────────────────────────────────────────────────────────────

/// Options for one export.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportOptions {
    /// The export format to use
    pub format: ExportFormat,

    /// Where to write the result; `None` means standard output
    pub output: Option<PathBuf>,

    /// Whether to open the written file afterwards
    pub open_after_export: bool,
}

impl ExportOptions {
    /// Set the export format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Open the written file after export.
    pub fn open_after(mut self, open: bool) -> Self {
        self.open_after_export = open;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
