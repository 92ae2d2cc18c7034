// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Writes `testFile.txt` and `masterTestFile.txt` through the wrapped OS file API.
#[derive(Debug, Parser)]
#[command(name = "fileseam", version)]
pub struct Cli {
    /// Log every primitive call
    #[arg(long, short)]
    pub verbose: bool,
    /// Only log errors
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Read preferences from FILE instead of ./fileseam.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Lets command-line flags override the file's preferences.
    pub fn apply(&self, config: &mut Config) {
        if self.verbose {
            config.preferences.verbose = true;
            config.preferences.quiet = false;
        }
        if self.quiet {
            config.preferences.quiet = true;
        }
        if self.no_color {
            config.preferences.color = false;
        }
    }
}
