// src/exit.rs
//! Process exit codes for `fileseam`.

use std::process::Termination;

use colored::Colorize;

use crate::error::{RunError, SeamError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Exit {
    /// Both jobs ran.
    Success = 0,
    /// Anything other than a failed job (config, logger).
    Error = 1,
    /// A create call returned the invalid handle.
    CreateFailed = 2,
    /// A write call failed or was short.
    WriteFailed = 3,
}

impl Exit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the code for an error surfaced by the binary.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        let run = err.downcast_ref::<RunError>().or_else(|| {
            match err.downcast_ref::<SeamError>() {
                Some(SeamError::Run(r)) => Some(r),
                _ => None,
            }
        });
        match run {
            Some(RunError::CreateFailed { .. }) => Self::CreateFailed,
            Some(RunError::WriteFailed { .. }) => Self::WriteFailed,
            None => Self::Error,
        }
    }
}

impl Termination for Exit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for Exit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                Self::for_error(&e)
            }
        }
    }
}
