//! In-process stand-in for the analytics dashboard backend.
//!
//! Covers exactly the surface the client's integration tests need: a login
//! endpoint that issues bearer tokens, a profile endpoint that answers 403
//! without a valid token (the session-expiry path), an Authorization-echo
//! route for header assertions, a delay route for timeout tests and an
//! arbitrary-status route. Any username logs in with the fixed password
//! `"secret"`; issued tokens live in memory for the server's lifetime.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Password accepted for every username.
pub const VALID_PASSWORD: &str = "secret";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    pub token: String,
    pub nickname: String,
    pub is_super_admin: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub nickname: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoedAuthorization {
    pub authorization: Option<String>,
}

/// Issued token → username.
#[derive(Default)]
pub struct Sessions {
    tokens: RwLock<HashMap<String, String>>,
    counter: AtomicU64,
}

pub type SharedSessions = Arc<Sessions>;

pub fn app() -> Router {
    let sessions: SharedSessions = Arc::new(Sessions::default());
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/user/user-info", get(user_info))
        .route("/echo/authorization", get(echo_authorization))
        .route("/delay/{ms}", get(delay))
        .route("/status/{code}", get(status_code))
        .with_state(sessions)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn login(
    State(sessions): State<SharedSessions>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    if input.password != VALID_PASSWORD {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let serial = sessions.counter.fetch_add(1, Ordering::Relaxed);
    let token = format!("tok-{}-{serial}", input.username);
    sessions
        .tokens
        .write()
        .await
        .insert(token.clone(), input.username.clone());
    tracing::info!(username = %input.username, "issued session token");
    Ok(Json(LoginResponse {
        status: "success".to_string(),
        message: "登录成功".to_string(),
        token,
        nickname: input.username.clone(),
        is_super_admin: input.username == "admin",
    }))
}

async fn user_info(
    State(sessions): State<SharedSessions>,
    headers: HeaderMap,
) -> Result<Json<UserInfo>, StatusCode> {
    let token = bearer_token(&headers).ok_or(StatusCode::FORBIDDEN)?;
    let tokens = sessions.tokens.read().await;
    let username = tokens.get(token).ok_or(StatusCode::FORBIDDEN)?;
    Ok(Json(UserInfo {
        username: username.clone(),
        nickname: username.clone(),
        phone: "13800000000".to_string(),
        email: format!("{username}@example.com"),
    }))
}

async fn echo_authorization(headers: HeaderMap) -> Json<EchoedAuthorization> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    Json(EchoedAuthorization { authorization })
}

async fn delay(Path(ms): Path<u64>) -> &'static str {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    "ok"
}

async fn status_code(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_strips_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn bearer_token_absent_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn login_response_serializes_camel_case() {
        let response = LoginResponse {
            status: "success".to_string(),
            message: "登录成功".to_string(),
            token: "tok-admin-0".to_string(),
            nickname: "admin".to_string(),
            is_super_admin: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isSuperAdmin"], true);
        assert_eq!(json["token"], "tok-admin-0");
    }
}
