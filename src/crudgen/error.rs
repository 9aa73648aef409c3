use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudgenError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Error reading UML file: {source}")]
    ReadUml {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error marshaling JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error making request: {0}")]
    Request(String),

    #[error("Error reading response: {0}")]
    ResponseBody(String),

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CrudgenError>;
