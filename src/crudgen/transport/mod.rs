//! # Transport Layer
//!
//! The [`Transport`] trait is the single seam between crudgen and the network. Commands
//! only ever see a fully-read [`HttpReply`]; how the bytes got there is the transport's
//! business.
//!
//! ## Implementations
//!
//! - [`http::HttpTransport`]: Production transport backed by a blocking reqwest client
//!   - One POST per call, no retry
//!   - No request timeout
//!
//! - [`stub::StubTransport`]: Scripted transport for testing
//!   - Replays queued replies or errors
//!   - Records every call so tests can assert on URL, body and call count

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod stub;

/// A response whose body has been read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Abstract interface for posting JSON to the generation service.
pub trait Transport {
    /// POST `body` to `url` as `application/json` and read the whole response.
    fn post_json(&mut self, url: &str, body: Vec<u8>) -> Result<HttpReply>;
}

/// Joins the service base URL and an endpoint path.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
