// src/component.rs
//! Composition roots: the only place the OS wrappers are chosen.

use crate::api::Split;
use crate::error::RunError;
use crate::os::{CloseHandleWrapper, CreateFileWrapper, MasterWrapper, WriteFileWrapper};
use crate::unit::{WriteJob, WriteUnit, MASTER_JOB, SINGLE_JOB};

/// Runs [`SINGLE_JOB`] through three separately owned wrappers.
#[derive(Debug, Default)]
pub struct Component {
    create: CreateFileWrapper,
    write: WriteFileWrapper,
    close: CloseHandleWrapper,
}

impl Component {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn job(&self) -> &'static WriteJob {
        &SINGLE_JOB
    }

    /// # Errors
    /// Propagates the unit's [`RunError`].
    pub fn run(&self) -> Result<(), RunError> {
        let api = Split::new(&self.create, &self.write, &self.close);
        WriteUnit::new(&api, self.job()).run()
    }
}

/// Runs [`MASTER_JOB`] through a single wrapper providing all capabilities.
#[derive(Debug, Default)]
pub struct MasterComponent {
    master: MasterWrapper,
}

impl MasterComponent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn job(&self) -> &'static WriteJob {
        &MASTER_JOB
    }

    /// # Errors
    /// Propagates the unit's [`RunError`].
    pub fn run(&self) -> Result<(), RunError> {
        WriteUnit::new(&self.master, self.job()).run()
    }
}
