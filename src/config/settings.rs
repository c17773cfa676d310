//! User settings for bookmark-view
//!
//! This module defines the `Settings` struct that holds user-configurable
//! options, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log filters accepted for `log_level`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// User preferences.
///
/// Serialized to JSON in the user's config directory. Every field has a
/// default, so partial or older config files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Whether to open exported documents in the system viewer
    pub open_after_export: bool,

    /// Directory for documents exported without an explicit output path
    pub last_export_directory: Option<PathBuf>,

    /// Recently rendered files (most recent first)
    pub recent_files: Vec<PathBuf>,

    /// Maximum number of recent files to remember
    pub max_recent_files: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            open_after_export: false,
            last_export_directory: None,
            recent_files: Vec::new(),
            max_recent_files: 10,
        }
    }
}

impl Settings {
    /// Upper bound for `max_recent_files`.
    pub const MAX_RECENT_FILES: usize = 100;

    /// Add a file to the recent files list.
    ///
    /// If the file already exists in the list, it's moved to the front.
    /// The list is trimmed to `max_recent_files`.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.max_recent_files);
    }

    /// Directory to export into when no output path is given.
    pub fn export_directory(&self) -> PathBuf {
        self.last_export_directory
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Remember the directory `output` was written to.
    pub fn remember_export(&mut self, output: &Path) {
        if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.last_export_directory = Some(dir.to_path_buf());
        }
    }

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// Used after loading a file that may have been edited by hand.
    pub fn sanitize(&mut self) {
        if self.max_recent_files == 0 {
            self.max_recent_files = 10;
        } else if self.max_recent_files > Self::MAX_RECENT_FILES {
            self.max_recent_files = Self::MAX_RECENT_FILES;
        }
        self.recent_files.truncate(self.max_recent_files);

        let level = self.log_level.trim().to_ascii_lowercase();
        self.log_level = if LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            String::from("warn")
        };
    }

    /// Deserialize settings and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.log_level, "warn");
        assert!(!settings.open_after_export);
        assert!(settings.last_export_directory.is_none());
        assert!(settings.recent_files.is_empty());
        assert_eq!(settings.max_recent_files, 10);
    }

    #[test]
    fn test_add_recent_file() {
        let mut settings = Settings {
            max_recent_files: 3,
            ..Settings::default()
        };

        settings.add_recent_file(PathBuf::from("/file1.md"));
        settings.add_recent_file(PathBuf::from("/file2.md"));
        settings.add_recent_file(PathBuf::from("/file3.md"));
        assert_eq!(settings.recent_files[0], PathBuf::from("/file3.md"));

        // Existing file moves to front
        settings.add_recent_file(PathBuf::from("/file1.md"));
        assert_eq!(settings.recent_files[0], PathBuf::from("/file1.md"));
        assert_eq!(settings.recent_files.len(), 3);

        // New file trims the oldest
        settings.add_recent_file(PathBuf::from("/file4.md"));
        assert_eq!(settings.recent_files.len(), 3);
        assert!(!settings.recent_files.contains(&PathBuf::from("/file2.md")));
    }

    #[test]
    fn test_export_directory_falls_back_to_temp() {
        let settings = Settings::default();
        assert_eq!(settings.export_directory(), std::env::temp_dir());
    }

    #[test]
    fn test_remember_export() {
        let mut settings = Settings::default();
        settings.remember_export(Path::new("/exports/note.html"));
        assert_eq!(
            settings.last_export_directory,
            Some(PathBuf::from("/exports"))
        );

        // Bare file names have no directory to remember
        settings.remember_export(Path::new("note.html"));
        assert_eq!(
            settings.last_export_directory,
            Some(PathBuf::from("/exports"))
        );
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let original = Settings {
            log_level: String::from("debug"),
            open_after_export: true,
            last_export_directory: Some(PathBuf::from("/tmp/out")),
            recent_files: vec![PathBuf::from("/a.md")],
            max_recent_files: 5,
        };
        let json = serde_json::to_string_pretty(&original).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_settings_deserialize_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"open_after_export": true, "future_feature": 1}"#).unwrap();
        assert!(settings.open_after_export);
    }

    #[test]
    fn test_sanitize_max_recent_files() {
        let mut settings = Settings {
            max_recent_files: 0,
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!(settings.max_recent_files, 10);

        settings.max_recent_files = 1000;
        settings.sanitize();
        assert_eq!(settings.max_recent_files, Settings::MAX_RECENT_FILES);
    }

    #[test]
    fn test_sanitize_truncates_recent_files() {
        let mut settings = Settings {
            max_recent_files: 2,
            recent_files: vec![
                PathBuf::from("/file1.md"),
                PathBuf::from("/file2.md"),
                PathBuf::from("/file3.md"),
            ],
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!(settings.recent_files.len(), 2);
    }

    #[test]
    fn test_sanitize_log_level() {
        let settings = Settings::from_json_sanitized(r#"{"log_level": " DEBUG "}"#).unwrap();
        assert_eq!(settings.log_level, "debug");

        let settings = Settings::from_json_sanitized(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(settings.log_level, "warn");
    }
}
