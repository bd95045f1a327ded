//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::text::TAB_WIDTH;
use crate::error::Result;

/// The three key-change options offered by the interactive flow.
///
/// The engine itself accepts any semitone count; these are the choices a
/// song leader actually reaches for between services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyChange {
    /// Down one semitone.
    Lower,
    /// Keep the original key.
    #[default]
    Same,
    /// Up one semitone.
    Higher,
}

impl KeyChange {
    /// Semitone shift for this option.
    #[must_use]
    pub const fn steps(self) -> i32 {
        match self {
            Self::Lower => -1,
            Self::Same => 0,
            Self::Higher => 1,
        }
    }

    /// Parse a user spelling like `lower`, `same`, `higher`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lower" | "down" => Some(Self::Lower),
            "same" => Some(Self::Same),
            "higher" | "up" => Some(Self::Higher),
            _ => None,
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Spaces per tab when normalizing song text
    pub tab_width: usize,
    /// Path to a directory of curated .txt song sheets
    pub sheet_dir: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            tab_width: TAB_WIDTH,
            sheet_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Tab width can be configured via environment
        if let Ok(width) = env::var("CHORDSHEET_TAB_WIDTH") {
            if let Ok(width) = width.parse::<usize>() {
                config.tab_width = width;
            }
        }

        // Sheet library: env var override, or default ~/Documents/Song Sheets/
        config.sheet_dir = env::var("CHORDSHEET_SHEET_DIR").ok().map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join("Documents/Song Sheets"))
                    .filter(|p| p.is_dir())
            },
            |path| {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                p.is_dir().then_some(p)
            },
        );

        Ok(config)
    }

    /// Check if a song sheet library is configured
    pub const fn has_sheet_dir(&self) -> bool {
        self.sheet_dir.is_some()
    }
}
