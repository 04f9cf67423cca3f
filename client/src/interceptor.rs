//! Request and response interceptor hooks.
//!
//! # Design
//! Both hooks are stateless pure steps over plain data, which keeps them
//! trivially safe under concurrent requests. `apply_auth` mutates the
//! outgoing [`RequestConfig`] before the transport sees it; `session_notice`
//! only observes the settled error and reports whether a notification is
//! due. The actual dispatch to the sink happens in `ApiClient::request`, so
//! nothing here performs I/O.

use crate::error::ClientError;
use crate::http::RequestConfig;
use crate::notify::{Notification, SESSION_EXPIRED_MESSAGE};
use crate::token::{TokenStore, TOKEN_KEY};

/// Attach `Authorization: Bearer <token>` when the store holds a non-empty
/// token. An absent or empty token leaves the headers untouched; a store
/// read failure propagates and the request is never sent.
pub fn apply_auth(
    store: &dyn TokenStore,
    config: &mut RequestConfig,
) -> Result<(), ClientError> {
    match store.get(TOKEN_KEY)? {
        Some(token) if !token.is_empty() => {
            config.set_header("Authorization", format!("Bearer {token}"));
        }
        _ => {}
    }
    Ok(())
}

/// Decide whether a settled error warrants the session-expired notification.
///
/// Only a well-formed 403 response qualifies; network failures, timeouts and
/// every other status pass silently. The error itself is never altered.
pub fn session_notice(error: &ClientError) -> Option<Notification> {
    match error {
        ClientError::Status { code: 403, .. } => {
            Some(Notification::error(SESSION_EXPIRED_MESSAGE))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::notify::Severity;
    use crate::token::{MemoryTokenStore, TokenStoreError};

    struct FailingStore;

    impl TokenStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, TokenStoreError> {
            Err(TokenStoreError("backing storage unavailable".to_string()))
        }
    }

    #[test]
    fn auth_header_set_when_token_present() {
        let store = MemoryTokenStore::new();
        store.set(TOKEN_KEY, "abc123".to_string());
        let mut config = RequestConfig::new(HttpMethod::Get, "/foo");

        apply_auth(&store, &mut config).unwrap();

        assert_eq!(config.header_value("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn headers_untouched_when_token_absent() {
        let store = MemoryTokenStore::new();
        let mut config = RequestConfig::new(HttpMethod::Get, "/foo");

        apply_auth(&store, &mut config).unwrap();

        assert!(config.headers.is_empty());
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemoryTokenStore::new();
        store.set(TOKEN_KEY, String::new());
        let mut config = RequestConfig::new(HttpMethod::Get, "/foo");

        apply_auth(&store, &mut config).unwrap();

        assert!(config.header_value("Authorization").is_none());
    }

    #[test]
    fn store_failure_propagates() {
        let mut config = RequestConfig::new(HttpMethod::Get, "/foo");
        let err = apply_auth(&FailingStore, &mut config).unwrap_err();
        assert!(matches!(err, ClientError::TokenStore(_)));
    }

    #[test]
    fn forbidden_status_produces_notification() {
        let err = ClientError::Status {
            code: 403,
            body: String::new(),
        };
        let notice = session_notice(&err).unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn other_statuses_produce_no_notification() {
        for code in [400, 401, 404, 500] {
            let err = ClientError::Status {
                code,
                body: String::new(),
            };
            assert!(session_notice(&err).is_none(), "status {code}");
        }
    }

    #[test]
    fn token_store_failure_produces_no_notification() {
        let err = ClientError::TokenStore(TokenStoreError("down".to_string()));
        assert!(session_notice(&err).is_none());
    }
}
