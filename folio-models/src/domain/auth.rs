use crate::{domain::user::UserInfo, enums::common::Role};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address")
    )]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub jti: String,
    /// User id, stringified per RFC 7519.
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub email: String,
    pub role: Role,
}

impl Claims {
    pub fn new(iss: String, user_id: i32, email: String, role: Role, expire: i64) -> Self {
        let now = Utc::now();
        Self {
            jti: Uuid::new_v4().into(),
            sub: user_id.to_string(),
            iss,
            iat: now.timestamp(),
            exp: now.timestamp() + expire,
            email,
            role,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
