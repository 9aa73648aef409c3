use super::{HttpReply, Transport};
use crate::error::{CrudgenError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Production transport: one blocking POST per call.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        // No request timeout; the blocking client would otherwise give up after 30s
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| CrudgenError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&mut self, url: &str, body: Vec<u8>) -> Result<HttpReply> {
        log::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| CrudgenError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CrudgenError::ResponseBody(e.to_string()))?;

        log::debug!("{} answered {} ({} bytes)", url, status, body.len());
        Ok(HttpReply { status, body })
    }
}
