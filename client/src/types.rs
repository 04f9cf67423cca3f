//! DTOs for the dashboard backend's JSON API.
//!
//! # Design
//! These types mirror the backend's camelCase wire format but are defined
//! independently of the mock-server crate; integration tests catch schema
//! drift between the two.

use serde::{Deserialize, Serialize};

/// Credentials payload for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login reply carrying the session token to persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    pub token: String,
    pub nickname: String,
    pub is_super_admin: bool,
}

/// Profile of the authenticated user from `GET /api/user/user-info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfoResponse {
    pub username: String,
    pub nickname: String,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_on_the_wire() {
        let raw = r#"{
            "status": "success",
            "message": "登录成功",
            "token": "tok-admin-1",
            "nickname": "管理员",
            "isSuperAdmin": true
        }"#;
        let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.token, "tok-admin-1");
        assert!(parsed.is_super_admin);

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["isSuperAdmin"], true);
    }

    #[test]
    fn login_request_serializes_credentials() {
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "admin");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn user_info_roundtrips_through_json() {
        let info = UserInfoResponse {
            username: "admin".to_string(),
            nickname: "管理员".to_string(),
            phone: "13800000000".to_string(),
            email: "admin@example.com".to_string(),
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: UserInfoResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
