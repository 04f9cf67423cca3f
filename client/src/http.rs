//! Plain-data request and response types for the client pipeline.
//!
//! # Design
//! `RequestConfig` is the mutable unit the request interceptor works on: it
//! is built by the caller, handed to the pipeline, and frozen once the
//! transport takes over. `Response` is immutable plain data constructed after
//! the transport settles. Header mappings keep keys unique; `set_header`
//! replaces an existing entry rather than appending a duplicate.

use std::time::Duration;

use serde::Serialize;

use crate::error::ClientError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// An outgoing request described as plain data.
///
/// Mutable only during the pre-send interceptor phase; after that the
/// transport owns it. `timeout` overrides the client default for this call
/// only.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set a header, replacing any existing entry with the same
    /// (case-insensitive) key. Keys in the mapping stay unique.
    pub fn set_header(&mut self, key: &str, value: String) {
        if let Some(entry) = self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            entry.1 = value;
        } else {
            self.headers.push((key.to_string(), value));
        }
    }

    /// Builder form of [`set_header`](Self::set_header).
    #[must_use]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.set_header(key, value.to_string());
        self
    }

    /// Serialize `payload` as the JSON body and set `content-type`.
    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_string(payload).map_err(ClientError::Encode)?;
        self.set_header("content-type", "application/json".to_string());
        self.body = Some(body);
        Ok(self)
    }

    /// Override the client-wide timeout for this call only.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Look up a header value by case-insensitive key.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// A settled HTTP response described as plain data. Immutable once received.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
