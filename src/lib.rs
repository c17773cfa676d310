//! bookmark-view - Render saved bookmark snippets as HTML
//!
//! The [`render`] module turns a bookmark's text, written in a small
//! Markdown subset, into a self-contained HTML document. The remaining
//! modules are the plumbing the command-line front end needs around it.

pub mod config;
pub mod error;
pub mod export;
pub mod render;

pub use error::{Error, Result};
pub use render::{render_body, render_markdown};
