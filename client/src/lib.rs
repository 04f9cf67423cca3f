//! Shared HTTP client for the analytics dashboard backend.
//!
//! # Overview
//! Wraps a configured `reqwest` transport (base address, default timeout)
//! behind a single asynchronous `request` operation with a two-hook
//! interceptor pipeline: before send, the bearer token is read from an
//! injected [`TokenStore`] and attached as an `Authorization` header; after
//! the transport settles, a 403 response triggers exactly one session-expired
//! notification through an injected [`NotificationSink`] while the error
//! itself passes through to the caller unchanged.
//!
//! # Design
//! - All collaborators (token store, notification sink, session-expired
//!   callback) are injected at construction — no ambient globals, so the
//!   client is testable in isolation.
//! - The interceptor hooks are pure functions over plain data; the actual
//!   side effect (notification dispatch) lives in `ApiClient::request` only.
//! - Nothing is retained across calls: each request/response cycle is
//!   independent and concurrent calls share no mutable state.

pub mod client;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod notify;
pub mod token;
pub mod types;

pub use client::{ApiClient, ClientConfig};
pub use error::ClientError;
pub use http::{HttpMethod, RequestConfig, Response};
pub use notify::{Notification, NotificationSink, Severity, TracingSink, SESSION_EXPIRED_MESSAGE};
pub use token::{MemoryTokenStore, TokenStore, TokenStoreError, TOKEN_KEY};
pub use types::{LoginRequest, LoginResponse, UserInfoResponse};
