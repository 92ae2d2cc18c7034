// src/logging.rs
//! Stderr sink for the `log` facade.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Result;

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Renders a record the way it is printed, without a trailing newline.
    #[must_use]
    pub fn format(record: &Record<'_>) -> String {
        let msg = record.args().to_string();
        match record.level() {
            Level::Error => format!("{} {msg}", "error:".red().bold()),
            Level::Warn => format!("{} {msg}", "warning:".yellow().bold()),
            Level::Info => msg,
            Level::Debug | Level::Trace => msg.dimmed().to_string(),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Callable once per process.
///
/// # Errors
/// Returns error if another logger was installed first.
pub fn init(level: LevelFilter, color: bool) -> Result<()> {
    colored::control::set_override(color);
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
