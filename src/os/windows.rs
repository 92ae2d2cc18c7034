// src/os/windows.rs
use std::ffi::CString;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE};
use windows_sys::Win32::Security::SECURITY_ATTRIBUTES;
use windows_sys::Win32::Storage::FileSystem::{CreateFileA, WriteFile};

use crate::api::{CreateRequest, Handle, WriteReport};

fn raw(handle: Handle) -> HANDLE {
    handle.as_raw() as HANDLE
}

pub(super) fn create_file(request: &CreateRequest) -> Handle {
    // CreateFileA decodes the path in the ANSI code page; only ASCII
    // survives that unchanged.
    let Some(path) = request
        .path
        .to_str()
        .filter(|p| p.is_ascii())
        .and_then(|p| CString::new(p).ok())
    else {
        return Handle::INVALID;
    };

    let security = request.security.map(|s| SECURITY_ATTRIBUTES {
        nLength: std::mem::size_of::<SECURITY_ATTRIBUTES>() as u32,
        lpSecurityDescriptor: ptr::null_mut(),
        bInheritHandle: i32::from(s.inherit_handle),
    });
    let security_ptr = security
        .as_ref()
        .map_or(ptr::null(), |s| s as *const SECURITY_ATTRIBUTES);
    let template = request.template.map_or(ptr::null_mut(), raw);

    // SAFETY: every pointer is either null or borrowed from a local that
    // outlives the call.
    let h = unsafe {
        CreateFileA(
            path.as_ptr().cast(),
            request.access.bits(),
            request.share_mode.bits(),
            security_ptr,
            request.disposition.code(),
            request.attributes.bits(),
            template,
        )
    };
    Handle::from_raw(h as isize)
}

pub(super) fn write_file(handle: Handle, buf: &[u8]) -> WriteReport {
    let Ok(len) = u32::try_from(buf.len()) else {
        return WriteReport::failed();
    };
    let mut written: u32 = 0;

    // SAFETY: `buf` is valid for `len` bytes and `written` outlives the call.
    let ok = unsafe {
        WriteFile(
            raw(handle),
            buf.as_ptr(),
            len,
            &mut written,
            ptr::null_mut(),
        )
    };
    WriteReport {
        success: ok != 0,
        bytes_written: written as usize,
    }
}

pub(super) fn close_handle(handle: Handle) -> bool {
    // SAFETY: an invalid handle makes the call fail, it does not fault.
    unsafe { CloseHandle(raw(handle)) != 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_path_yields_invalid_handle() {
        let d = tempfile::tempdir().unwrap();
        let path = d.path().join("caf\u{e9}.txt");
        assert!(create_file(&CreateRequest::create_new(&path)).is_invalid());
        assert!(!path.exists());
    }
}
