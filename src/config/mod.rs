//! Configuration module for bookmark-view
//!
//! This module handles user preferences, including JSON serialization and
//! persistent storage in the platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
