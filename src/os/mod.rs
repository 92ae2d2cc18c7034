// src/os/mod.rs
//! Pass-through wrappers over the OS file API.
//!
//! Each wrapper forwards its arguments to the platform call and hands the
//! result back unmodified. Nothing here retries or interprets error codes.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use self::unix as sys;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use self::windows as sys;

use crate::api::{CloseHandle, CreateFile, CreateRequest, Handle, WriteFile, WriteReport};

/// Forwards to `CreateFileA` / `open(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateFileWrapper;

/// Forwards to `WriteFile` / `write(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WriteFileWrapper;

/// Forwards to `CloseHandle` / `close(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CloseHandleWrapper;

/// All three wrappers in one object.
#[derive(Debug, Default, Clone, Copy)]
pub struct MasterWrapper;

impl CreateFile for CreateFileWrapper {
    fn create_file(&self, request: &CreateRequest) -> Handle {
        sys::create_file(request)
    }
}

impl WriteFile for WriteFileWrapper {
    fn write_file(&self, handle: Handle, buf: &[u8]) -> WriteReport {
        sys::write_file(handle, buf)
    }
}

impl CloseHandle for CloseHandleWrapper {
    fn close_handle(&self, handle: Handle) -> bool {
        sys::close_handle(handle)
    }
}

impl CreateFile for MasterWrapper {
    fn create_file(&self, request: &CreateRequest) -> Handle {
        sys::create_file(request)
    }
}

impl WriteFile for MasterWrapper {
    fn write_file(&self, handle: Handle, buf: &[u8]) -> WriteReport {
        sys::write_file(handle, buf)
    }
}

impl CloseHandle for MasterWrapper {
    fn close_handle(&self, handle: Handle) -> bool {
        sys::close_handle(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Disposition;
    use std::fs;

    #[test]
    fn wrappers_touch_the_real_filesystem() {
        let d = tempfile::tempdir().unwrap();
        let path = d.path().join("out.txt");

        let h = CreateFileWrapper.create_file(&CreateRequest::create_new(&path));
        assert!(!h.is_invalid());
        assert_eq!(WriteFileWrapper.write_file(h, b"hello"), WriteReport::ok(5));
        assert!(CloseHandleWrapper.close_handle(h));

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn create_new_refuses_existing_file() {
        let d = tempfile::tempdir().unwrap();
        let path = d.path().join("taken.txt");
        fs::write(&path, "x").unwrap();

        let h = MasterWrapper.create_file(&CreateRequest::create_new(&path));
        assert!(h.is_invalid());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn create_always_truncates() {
        let d = tempfile::tempdir().unwrap();
        let path = d.path().join("trunc.txt");
        fs::write(&path, "old contents").unwrap();

        let mut req = CreateRequest::create_new(&path);
        req.disposition = Disposition::CreateAlways;
        let h = MasterWrapper.create_file(&req);
        assert!(!h.is_invalid());
        assert_eq!(MasterWrapper.write_file(h, b"new"), WriteReport::ok(3));
        assert!(MasterWrapper.close_handle(h));

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn open_existing_fails_when_missing() {
        let d = tempfile::tempdir().unwrap();
        let mut req = CreateRequest::create_new(d.path().join("missing.txt"));
        req.disposition = Disposition::OpenExisting;
        assert!(MasterWrapper.create_file(&req).is_invalid());
    }

    #[test]
    fn write_to_invalid_handle_reports_failure() {
        let report = WriteFileWrapper.write_file(Handle::INVALID, b"x");
        assert!(!report.success);
    }

    // On Windows the sentinel doubles as the current-process pseudo-handle,
    // which closes successfully.
    #[cfg(unix)]
    #[test]
    fn close_of_invalid_handle_reports_failure() {
        assert!(!CloseHandleWrapper.close_handle(Handle::INVALID));
    }
}
