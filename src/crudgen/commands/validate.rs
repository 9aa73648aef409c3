use crate::commands::{read_uml, CmdMessage, CmdResult, VALIDATE_PATH};
use crate::error::Result;
use crate::transport::{endpoint_url, Transport};
use std::path::Path;

pub const VALIDATION_PASSED: &str = "UML validation completed";
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Sends the raw UML text to the validation endpoint.
///
/// Only the status code matters. An unreachable service counts as a failed
/// validation rather than an error; an unreadable UML file is still an error.
pub fn run<T: Transport>(transport: &mut T, base_url: &str, uml_path: &Path) -> Result<CmdResult> {
    let uml_content = read_uml(uml_path)?;
    let body = serde_json::to_vec(&uml_content)?;

    match transport.post_json(&endpoint_url(base_url, VALIDATE_PATH), body) {
        Ok(reply) if reply.is_ok() => {
            let mut result = CmdResult::default().with_status(reply.status);
            result.add_message(CmdMessage::success(VALIDATION_PASSED));
            Ok(result)
        }
        Ok(reply) => {
            log::debug!("validation rejected with status {}", reply.status);
            let mut result = CmdResult::default().with_status(reply.status);
            result.add_message(CmdMessage::error(VALIDATION_FAILED));
            Ok(result)
        }
        Err(e) => {
            log::debug!("validation request failed: {}", e);
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(VALIDATION_FAILED));
            Ok(result)
        }
    }
}
