//! # API Facade
//!
//! [`CrudgenApi`] is the entry point for every operation, whatever the UI. It owns the
//! transport and the service base URL and hands them to the command functions.
//!
//! Like the command layer it never prints and never exits; it returns
//! `Result<CmdResult>` and lets the caller decide how to present it.
//!
//! ## Generic Over Transport
//!
//! - Production: `CrudgenApi<HttpTransport>`
//! - Testing: `CrudgenApi<StubTransport>`

use crate::commands::{self, CmdResult, GenerateOptions};
use crate::error::Result;
use crate::transport::Transport;
use std::path::Path;

pub struct CrudgenApi<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> CrudgenApi<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn generate(&mut self, options: &GenerateOptions) -> Result<CmdResult> {
        commands::generate::run(&mut self.transport, &self.base_url, options)
    }

    pub fn validate(&mut self, uml_path: &Path) -> Result<CmdResult> {
        commands::validate::run(&mut self.transport, &self.base_url, uml_path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
