// src/api/types.rs
//! Argument and result types shared by the capability traits.
//!
//! Flag values mirror the Win32 constants so the Windows wrappers forward
//! them untouched; the Unix wrappers translate them to `open(2)` flags.

use bitflags::bitflags;
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque identifier for an open file.
///
/// A file descriptor on Unix, a `HANDLE` on Windows. Both platforms report
/// failure with the same bit pattern, exposed as [`Handle::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(isize);

impl Handle {
    pub const INVALID: Handle = Handle(-1);

    #[must_use]
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_raw(self) -> isize {
        self.0
    }

    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

bitflags! {
    /// Desired access (`GENERIC_*`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Access: u32 {
        const READ = 0x8000_0000;
        const WRITE = 0x4000_0000;
    }
}

bitflags! {
    /// Share mode (`FILE_SHARE_*`). Empty means exclusive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShareMode: u32 {
        const READ = 0x1;
        const WRITE = 0x2;
        const DELETE = 0x4;
    }
}

bitflags! {
    /// Flags and attributes (`FILE_ATTRIBUTE_*`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Attributes: u32 {
        const READONLY = 0x1;
        const HIDDEN = 0x2;
        const NORMAL = 0x80;
        const TEMPORARY = 0x100;
    }
}

/// Creation disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Disposition {
    /// Fail if the file exists.
    CreateNew = 1,
    CreateAlways = 2,
    OpenExisting = 3,
    OpenAlways = 4,
    TruncateExisting = 5,
}

impl Disposition {
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecurityAttributes {
    pub inherit_handle: bool,
}

/// The seven arguments of a create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub path: PathBuf,
    pub access: Access,
    pub share_mode: ShareMode,
    pub security: Option<SecurityAttributes>,
    pub disposition: Disposition,
    pub attributes: Attributes,
    pub template: Option<Handle>,
}

impl CreateRequest {
    /// Write-only, exclusive, fails if `path` already exists.
    #[must_use]
    pub fn create_new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            access: Access::WRITE,
            share_mode: ShareMode::empty(),
            security: None,
            disposition: Disposition::CreateNew,
            attributes: Attributes::NORMAL,
            template: None,
        }
    }
}

/// Result of a write call: the OS success flag and the byte count it reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    pub success: bool,
    pub bytes_written: usize,
}

impl WriteReport {
    #[must_use]
    pub const fn ok(bytes_written: usize) -> Self {
        Self {
            success: true,
            bytes_written,
        }
    }

    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            bytes_written: 0,
        }
    }

    /// True when the call succeeded and wrote exactly `expected` bytes.
    #[must_use]
    pub const fn is_complete(&self, expected: usize) -> bool {
        self.success && self.bytes_written == expected
    }
}
