//! The shared HTTP client core.
//!
//! # Design
//! `ApiClient` owns a configured `reqwest` transport plus its injected
//! collaborators and exposes one asynchronous `request` operation. Every call
//! runs the same pipeline: request interceptor (attach bearer token), send
//! with the effective timeout, map the transport outcome into
//! [`ClientError`], response interceptor (403 notification). The client
//! retains nothing between calls and performs no retries; concurrent
//! requests are fully independent.

use std::sync::Arc;
use std::time::Duration;

use crate::error::ClientError;
use crate::http::{HttpMethod, RequestConfig, Response};
use crate::interceptor;
use crate::notify::NotificationSink;
use crate::token::TokenStore;
use crate::types::{LoginRequest, LoginResponse, UserInfoResponse};

/// Default base address of the dashboard backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Transport configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Shared client for the dashboard backend.
///
/// Cheap to clone; clones share the same connection pool, token store and
/// notification sink.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
    sink: Arc<dyn NotificationSink>,
    on_session_expired: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ApiClient {
    /// Build a client with the default base address and timeout.
    pub fn new(
        store: Arc<dyn TokenStore>,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default(), store, sink)
    }

    pub fn with_config(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            http,
            store,
            sink,
            on_session_expired: None,
        })
    }

    /// Register a callback invoked after the session-expired notification.
    ///
    /// The client itself only notifies on 403; callers wanting cleanup or a
    /// redirect to the login page hook it in here.
    #[must_use]
    pub fn on_session_expired(mut self, callback: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.on_session_expired = Some(callback);
        self
    }

    /// Execute one request through the interceptor pipeline.
    ///
    /// Non-2xx responses come back as [`ClientError::Status`]; a 403
    /// additionally emits exactly one session-expired notification (and
    /// fires the registered callback) before the error is returned. The
    /// error content is never altered by the pipeline.
    pub async fn request(&self, mut config: RequestConfig) -> Result<Response, ClientError> {
        interceptor::apply_auth(self.store.as_ref(), &mut config)?;

        let result = self.send(config).await;
        if let Err(error) = &result {
            if let Some(notice) = interceptor::session_notice(error) {
                tracing::warn!("session expired, notifying caller");
                self.sink.notify(&notice);
                if let Some(callback) = &self.on_session_expired {
                    callback();
                }
            }
        }
        result
    }

    async fn send(&self, config: RequestConfig) -> Result<Response, ClientError> {
        let url = self.target(&config.path);
        tracing::debug!(method = ?config.method, %url, "sending request");

        let mut request = self
            .http
            .request(config.method.into(), &url)
            .timeout(config.timeout.unwrap_or(self.timeout));
        for (key, value) in &config.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = config.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(map_transport_error)?;

        if !(200..300).contains(&status) {
            return Err(ClientError::Status { code: status, body });
        }
        Ok(Response {
            status,
            headers,
            body,
        })
    }

    /// Resolve a path against the base address by simple concatenation.
    fn target(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticate and return the session reply; the caller decides whether
    /// to persist the token.
    pub async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let config = RequestConfig::new(HttpMethod::Post, "/api/auth/login").json(input)?;
        let response = self.request(config).await?;
        serde_json::from_str(&response.body).map_err(ClientError::Decode)
    }

    /// Fetch the authenticated user's profile.
    pub async fn user_info(&self) -> Result<UserInfoResponse, ClientError> {
        let config = RequestConfig::new(HttpMethod::Get, "/api/user/user-info");
        let response = self.request(config).await?;
        serde_json::from_str(&response.body).map_err(ClientError::Decode)
    }
}

/// A request that never produced a response is either a timeout or a plain
/// network failure; everything else from the transport is a network error.
fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(error)
    } else {
        ClientError::Network(error)
    }
}
