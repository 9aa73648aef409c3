use crate::error::{CrudgenError, Result};
use crate::model::GenerationResult;
use std::path::{Path, PathBuf};

pub mod generate;
pub mod next_steps;
pub mod validate;

pub const GENERATE_PATH: &str = "/api/v2/generate/files";
pub const VALIDATE_PATH: &str = "/api/generate/validate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// HTTP status of the service reply, when one was received.
    pub status: Option<u16>,
    /// Decoded generation summary; only set for a 200 reply to `generate`.
    pub generation: Option<GenerationResult>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_generation(mut self, generation: GenerationResult) -> Self {
        self.generation = Some(generation);
        self
    }
}

/// User options for the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub uml_path: PathBuf,
    pub output_path: String,
    /// Framework label as typed by the user; mapped to a [`crate::model::Framework`]
    /// for the request, used verbatim for the next-step lookup.
    pub framework: String,
    pub package_name: String,
}

/// Reads the UML source. Bytes that are not valid UTF-8 become U+FFFD.
pub(crate) fn read_uml(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| CrudgenError::ReadUml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
