//! Document export for bookmark-view
//!
//! File-level helpers around the renderer: read bookmark content from disk,
//! render it, and write the result where a viewer can pick it up.
//!
//! # Architecture
//!
//! - `options.rs` - Export format and options
//! - `html.rs` - Reading, rendering and writing HTML documents

pub mod html;
pub mod options;

pub use html::{
    default_output_path, ensure_distinct_paths, export_to_html_file, read_markdown, render_export,
    write_html,
};
pub use options::{ExportFormat, ExportOptions};
