// task-tracker/src/api/dto/auth_dto.rs

use crate::domain::user_model;
use crate::utils::validation::{self, password, required, username};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(
            min = username::MIN_LENGTH,
            max = username::MAX_LENGTH,
            message = "Username must be between 3 and 30 characters"
        ),
        custom(function = validation::validate_username)
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(
        min = password::MIN_LENGTH,
        max = password::MAX_LENGTH,
        message = "Password must be between 8 and 128 characters"
    ))]
    pub password: String,
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = required::MIN_LENGTH, message = "Email or username is required"))]
    pub identifier: String, // email or username

    #[validate(length(min = required::MIN_LENGTH, message = "Password is required"))]
    pub password: String,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<user_model::Model> for UserResponse {
    fn from(user: user_model::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 認証レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub tokens: TokenResponse,
}
