// src/api/mock.rs
use mockall::mock;

use super::{CloseHandle, CreateFile, CreateRequest, Handle, WriteFile, WriteReport};

mock! {
    /// One mock standing in for all three capabilities.
    pub(crate) Master {}

    impl CreateFile for Master {
        fn create_file(&self, request: &CreateRequest) -> Handle;
    }

    impl WriteFile for Master {
        fn write_file(&self, handle: Handle, buf: &[u8]) -> WriteReport;
    }

    impl CloseHandle for Master {
        fn close_handle(&self, handle: Handle) -> bool;
    }
}
