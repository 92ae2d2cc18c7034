// src/unit.rs
//! The write operation, expressed only through the capability traits.

use log::{debug, warn};

use crate::api::{CreateRequest, FileApi, Handle};
use crate::error::RunError;

/// A fixed file name and the literal bytes written into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteJob {
    pub file_name: &'static str,
    pub payload: &'static [u8],
}

/// Job run by [`crate::component::Component`].
pub const SINGLE_JOB: WriteJob = WriteJob {
    file_name: "testFile.txt",
    payload: b"yay!!",
};

/// Job run by [`crate::component::MasterComponent`].
pub const MASTER_JOB: WriteJob = WriteJob {
    file_name: "masterTestFile.txt",
    payload: b"hooray!!",
};

/// Creates `job.file_name`, writes `job.payload` into it and closes it.
///
/// Borrows its capabilities; whoever builds the unit decides whether they are
/// the OS wrappers or test doubles.
pub struct WriteUnit<'a, A: FileApi + ?Sized> {
    api: &'a A,
    job: &'a WriteJob,
}

impl<'a, A: FileApi + ?Sized> WriteUnit<'a, A> {
    #[must_use]
    pub fn new(api: &'a A, job: &'a WriteJob) -> Self {
        Self { api, job }
    }

    #[must_use]
    pub fn job(&self) -> &WriteJob {
        self.job
    }

    /// Runs the job once.
    ///
    /// # Errors
    /// `CreateFailed` if the file could not be created (nothing is closed),
    /// `WriteFailed` if the write failed or was not exactly
    /// `payload.len()` bytes (the handle is closed first).
    pub fn run(&self) -> Result<(), RunError> {
        let request = CreateRequest::create_new(self.job.file_name);
        let handle = self.api.create_file(&request);
        if handle.is_invalid() {
            return Err(RunError::CreateFailed {
                path: self.job.file_name.to_string(),
            });
        }
        debug!("created {} (handle {handle})", self.job.file_name);

        let expected = self.job.payload.len();
        let report = self.api.write_file(handle, self.job.payload);
        if !report.is_complete(expected) {
            self.release(handle);
            return Err(RunError::WriteFailed {
                path: self.job.file_name.to_string(),
                written: report.bytes_written,
                expected,
            });
        }
        debug!("wrote {expected} bytes to {}", self.job.file_name);

        self.release(handle);
        Ok(())
    }

    // Close failures are logged and otherwise ignored.
    fn release(&self, handle: Handle) {
        if self.api.close_handle(handle) {
            debug!("closed {} (handle {handle})", self.job.file_name);
        } else {
            warn!(
                "CloseHandle failed for {} (handle {handle}); ignoring",
                self.job.file_name
            );
        }
    }
}
