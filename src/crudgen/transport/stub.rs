use super::{HttpReply, Transport};
use crate::error::{CrudgenError, Result};
use std::collections::VecDeque;

/// A call captured by [`StubTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub body: Vec<u8>,
}

impl RecordedCall {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

enum Scripted {
    Reply(HttpReply),
    Unreachable(String),
}

/// Scripted transport for tests.
///
/// Replies are consumed in order. Calling it with nothing queued is treated as
/// an unreachable server.
#[derive(Default)]
pub struct StubTransport {
    script: VecDeque<Scripted>,
    pub calls: Vec<RecordedCall>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, status: u16, body: impl Into<String>) -> Self {
        self.script
            .push_back(Scripted::Reply(HttpReply::new(status, body)));
        self
    }

    pub fn unreachable(mut self, reason: impl Into<String>) -> Self {
        self.script.push_back(Scripted::Unreachable(reason.into()));
        self
    }
}

impl Transport for StubTransport {
    fn post_json(&mut self, url: &str, body: Vec<u8>) -> Result<HttpReply> {
        self.calls.push(RecordedCall {
            url: url.to_string(),
            body,
        });
        match self.script.pop_front() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Unreachable(reason)) => Err(CrudgenError::Request(reason)),
            None => Err(CrudgenError::Request("connection refused".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_in_order_and_records_calls() {
        let mut stub = StubTransport::new()
            .reply(200, "first")
            .unreachable("dns failure");

        let first = stub.post_json("http://a/x", b"\"1\"".to_vec()).unwrap();
        assert_eq!(first, HttpReply::new(200, "first"));

        let second = stub.post_json("http://a/y", b"{}".to_vec());
        assert!(matches!(second, Err(CrudgenError::Request(ref r)) if r == "dns failure"));

        assert!(stub.post_json("http://a/z", Vec::new()).is_err());

        assert_eq!(stub.calls.len(), 3);
        assert_eq!(stub.calls[0].url, "http://a/x");
        assert_eq!(stub.calls[0].json(), serde_json::json!("1"));
    }
}
