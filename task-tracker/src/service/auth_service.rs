// task-tracker/src/service/auth_service.rs
use crate::api::dto::auth_dto::{
    AuthResponse, SigninRequest, SignupRequest, TokenResponse, UserResponse,
};
use crate::domain::user_model::{self, UserClaims};
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::UserRepository;
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> Self {
        Self {
            user_repo,
            password_manager,
            jwt_manager,
        }
    }

    /// ユーザー登録
    pub async fn signup(&self, signup_data: SignupRequest) -> AppResult<AuthResponse> {
        signup_data.validate()?;

        // メールアドレスとユーザー名の重複チェック
        if self.user_repo.is_email_taken(&signup_data.email).await? {
            return Err(AppError::Conflict(
                "email address is already registered".to_string(),
            ));
        }

        if self
            .user_repo
            .is_username_taken(&signup_data.username)
            .await?
        {
            return Err(AppError::Conflict("username is already taken".to_string()));
        }

        let password_hash = self
            .password_manager
            .hash_password(&signup_data.password)
            .map_err(|e| {
                AppError::InternalServerError(format!("Password hashing failed: {}", e))
            })?;

        let user = self
            .user_repo
            .create(signup_data.username, signup_data.email, password_hash)
            .await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            "User registered successfully"
        );

        self.auth_response(user)
    }

    /// ログイン
    pub async fn signin(&self, signin_data: SigninRequest) -> AppResult<AuthResponse> {
        signin_data.validate()?;

        let user = self
            .user_repo
            .find_by_email_or_username(&signin_data.identifier)
            .await?
            .ok_or_else(|| {
                warn!(
                    identifier = %signin_data.identifier,
                    "Login attempt with invalid credentials"
                );
                AppError::Unauthorized("Invalid credentials".to_string())
            })?;

        let password_valid = self
            .password_manager
            .verify_password(&signin_data.password, &user.password_hash)
            .map_err(|e| {
                AppError::InternalServerError(format!("Password verification failed: {}", e))
            })?;

        if !password_valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        info!(user_id = %user.id, "User signed in");
        self.auth_response(user)
    }

    /// 現在のユーザー情報を取得
    pub async fn get_current_user(&self, user_id: i32) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User no longer exists".to_string()))?;
        Ok(user.into())
    }

    fn auth_response(&self, user: user_model::Model) -> AppResult<AuthResponse> {
        let access_token = self
            .jwt_manager
            .generate_access_token(UserClaims::from(&user))
            .map_err(|e| {
                AppError::InternalServerError(format!("Token generation failed: {}", e))
            })?;

        Ok(AuthResponse {
            user: user.into(),
            tokens: TokenResponse::bearer(
                access_token,
                self.jwt_manager.access_token_expires_in(),
            ),
        })
    }
}
