//! bookmark-view - Main Entry Point
//!
//! Reads a bookmark's content from a file or stdin, renders it to HTML, and
//! writes the document to stdout or a file.

use bookmark_view::config::{get_config_file_path, load_config_from, save_config_silent, Settings};
use bookmark_view::error::{Result, ResultExt};
use bookmark_view::export::{
    default_output_path, ensure_distinct_paths, read_markdown, render_export, write_html,
    ExportFormat, ExportOptions,
};
use clap::Parser;
use log::{debug, info, warn};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Application name constant.
const APP_NAME: &str = "bookmark-view";

/// Render saved bookmark snippets as self-contained HTML.
#[derive(Parser)]
#[command(name = "bookmark-view", version, about)]
struct Cli {
    /// Markdown file to render; omit or pass `-` to read stdin.
    input: Option<PathBuf>,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit only the body fragment, without the document shell.
    #[arg(long)]
    fragment: bool,

    /// Open the written document in the system viewer.
    #[arg(long)]
    open: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let loaded = get_config_file_path().and_then(|path| load_config_from(&path));

    // Initialize logging; --verbose wins over the configured level
    let level = if cli.verbose {
        "debug"
    } else {
        loaded
            .as_ref()
            .map(|settings| settings.log_level.as_str())
            .unwrap_or("warn")
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut settings =
        loaded.unwrap_or_warn_default(Settings::default(), "Failed to load configuration");

    info!("Starting {}", APP_NAME);

    if let Err(err) = run(cli, &mut settings) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, settings: &mut Settings) -> Result<()> {
    let source = cli.input.filter(|path| path.as_os_str() != "-");
    let format = if cli.fragment {
        ExportFormat::Fragment
    } else {
        ExportFormat::Document
    };

    let mut options = ExportOptions::default().with_format(format);
    if let Some(output) = cli.output {
        options = options
            .with_output(output)
            .open_after(cli.open || settings.open_after_export);
    } else if cli.open {
        let output = default_output_path(source.as_deref(), &settings.export_directory(), format);
        options = options.with_output(output).open_after(true);
    }

    if let (Some(source), Some(output)) = (&source, &options.output) {
        ensure_distinct_paths(source, output)?;
    }

    let markdown = match &source {
        Some(path) => read_markdown(path)?,
        None => {
            debug!("Reading content from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let html = render_export(Some(&markdown), options.format);

    match &options.output {
        Some(path) => {
            write_html(path, &html)?;
            settings.remember_export(path);
            if options.open_after_export {
                open_document(path);
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    if let Some(path) = source {
        let path = path.canonicalize().unwrap_or(path);
        settings.add_recent_file(path);
    }
    save_config_silent(settings);

    Ok(())
}

/// Hand a written document to the system viewer.
fn open_document(path: &Path) {
    match open::that(path) {
        Ok(()) => info!("Opened {}", path.display()),
        Err(e) => warn!("Failed to open {}: {}", path.display(), e),
    }
}
