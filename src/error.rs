// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single `run()` of a write unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The create call returned the invalid-handle sentinel.
    #[error("CreateFile failed for {path}")]
    CreateFailed { path: String },

    /// The write call reported failure or wrote the wrong number of bytes.
    /// The handle has already been closed when this is returned.
    #[error("WriteFile failed for {path}: wrote {written} of {expected} bytes")]
    WriteFailed {
        path: String,
        written: usize,
        expected: usize,
    },
}

#[derive(Debug, Error)]
pub enum SeamError {
    #[error(transparent)]
    Run(#[from] RunError),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Logger already installed")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SeamError>;
