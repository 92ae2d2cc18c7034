// src/config/mod.rs
pub mod types;

pub use self::types::{Config, FileSeamToml, Preferences};

use crate::error::{Result, SeamError};
use log::LevelFilter;
use std::fs;
use std::io;
use std::path::Path;

pub const CONFIG_FILE: &str = "fileseam.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `fileseam.toml` from the working directory, if present.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads config from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(SeamError::Io {
                    source,
                    path: path.to_path_buf(),
                })
            }
        };
        Self::parse_toml(&content, path)
    }

    /// # Errors
    /// Returns `SeamError::Config` if `content` is not valid config TOML.
    pub fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let parsed: FileSeamToml = toml::from_str(content).map_err(|source| SeamError::Config {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            preferences: parsed.preferences,
        })
    }

    /// Log level implied by the preferences. Quiet wins over verbose.
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        if self.preferences.quiet {
            LevelFilter::Error
        } else if self.preferences.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
