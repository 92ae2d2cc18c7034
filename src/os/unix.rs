// src/os/unix.rs
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;

use crate::api::{Access, Attributes, CreateRequest, Disposition, Handle, WriteReport};

const MODE_DEFAULT: libc::mode_t = 0o666;
const MODE_READONLY: libc::mode_t = 0o444;

pub(super) fn create_file(request: &CreateRequest) -> Handle {
    let Ok(path) = CString::new(request.path.as_os_str().as_bytes()) else {
        return Handle::INVALID;
    };
    let mode = if request.attributes.contains(Attributes::READONLY) {
        MODE_READONLY
    } else {
        MODE_DEFAULT
    };

    // SAFETY: `path` is NUL-terminated and outlives the call.
    let fd = unsafe {
        libc::open(
            path.as_ptr(),
            open_flags(request),
            libc::c_uint::from(mode),
        )
    };
    Handle::from_raw(fd as isize)
}

pub(super) fn write_file(handle: Handle, buf: &[u8]) -> WriteReport {
    let Ok(fd) = libc::c_int::try_from(handle.as_raw()) else {
        return WriteReport::failed();
    };

    // SAFETY: `buf` is valid for `buf.len()` bytes for the duration of the call.
    let n = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
    match usize::try_from(n) {
        Ok(written) => WriteReport::ok(written),
        Err(_) => WriteReport::failed(),
    }
}

pub(super) fn close_handle(handle: Handle) -> bool {
    let Ok(fd) = libc::c_int::try_from(handle.as_raw()) else {
        return false;
    };

    // SAFETY: closing an arbitrary descriptor is sound; a bad one yields EBADF.
    unsafe { libc::close(fd) == 0 }
}

fn open_flags(request: &CreateRequest) -> libc::c_int {
    let access = if request.access.contains(Access::READ | Access::WRITE) {
        libc::O_RDWR
    } else if request.access.contains(Access::WRITE) {
        libc::O_WRONLY
    } else {
        libc::O_RDONLY
    };

    let disposition = match request.disposition {
        Disposition::CreateNew => libc::O_CREAT | libc::O_EXCL,
        Disposition::CreateAlways => libc::O_CREAT | libc::O_TRUNC,
        Disposition::OpenExisting => 0,
        Disposition::OpenAlways => libc::O_CREAT,
        Disposition::TruncateExisting => libc::O_TRUNC,
    };

    access | disposition | libc::O_CLOEXEC
}
