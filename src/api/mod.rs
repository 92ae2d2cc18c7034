// src/api/mod.rs
//! Capability traits, one per OS file primitive.
//!
//! Code that needs to create, write or close files depends on these traits
//! instead of the OS. Production binds the wrappers in [`crate::os`]; tests
//! bind mocks.

pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use self::types::{
    Access, Attributes, CreateRequest, Disposition, Handle, SecurityAttributes, ShareMode,
    WriteReport,
};

/// Opens or creates a file.
#[cfg_attr(test, mockall::automock)]
pub trait CreateFile {
    /// Returns [`Handle::INVALID`] on failure.
    fn create_file(&self, request: &CreateRequest) -> Handle;
}

/// Writes bytes to an open handle.
#[cfg_attr(test, mockall::automock)]
pub trait WriteFile {
    fn write_file(&self, handle: Handle, buf: &[u8]) -> WriteReport;
}

/// Releases an open handle.
#[cfg_attr(test, mockall::automock)]
pub trait CloseHandle {
    /// Returns `false` if the OS refused to close the handle.
    fn close_handle(&self, handle: Handle) -> bool;
}

/// All three capabilities in one object.
pub trait FileApi: CreateFile + WriteFile + CloseHandle {}

impl<T: CreateFile + WriteFile + CloseHandle + ?Sized> FileApi for T {}

/// Presents three separately supplied capabilities as one [`FileApi`].
///
/// Lets each primitive be substituted on its own. Passing the same object
/// three times is equivalent to binding it directly.
pub struct Split<'a, C: ?Sized, W: ?Sized, X: ?Sized> {
    create: &'a C,
    write: &'a W,
    close: &'a X,
}

impl<'a, C, W, X> Split<'a, C, W, X>
where
    C: CreateFile + ?Sized,
    W: WriteFile + ?Sized,
    X: CloseHandle + ?Sized,
{
    #[must_use]
    pub fn new(create: &'a C, write: &'a W, close: &'a X) -> Self {
        Self {
            create,
            write,
            close,
        }
    }
}

impl<C: CreateFile + ?Sized, W: ?Sized, X: ?Sized> CreateFile for Split<'_, C, W, X> {
    fn create_file(&self, request: &CreateRequest) -> Handle {
        self.create.create_file(request)
    }
}

impl<C: ?Sized, W: WriteFile + ?Sized, X: ?Sized> WriteFile for Split<'_, C, W, X> {
    fn write_file(&self, handle: Handle, buf: &[u8]) -> WriteReport {
        self.write.write_file(handle, buf)
    }
}

impl<C: ?Sized, W: ?Sized, X: CloseHandle + ?Sized> CloseHandle for Split<'_, C, W, X> {
    fn close_handle(&self, handle: Handle) -> bool {
        self.close.close_handle(handle)
    }
}
