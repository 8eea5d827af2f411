// task-tracker/src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{AuthResponse, SigninRequest, SignupRequest, UserResponse};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::AppJson;
use crate::middleware::auth::{AuthenticatedUser, ACCESS_TOKEN_COOKIE_NAME};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

/// ユーザー登録
pub async fn signup_handler(
    State(app_state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    info!(username = %payload.username, "User signup attempt");

    let auth_response = app_state.auth_service.signup(payload).await?;
    let jar = jar.add(access_token_cookie(&auth_response, app_state.config.is_production()));

    Ok((StatusCode::CREATED, jar, Json(auth_response)))
}

/// ログイン
pub async fn signin_handler(
    State(app_state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<SigninRequest>,
) -> AppResult<impl IntoResponse> {
    info!(identifier = %payload.identifier, "User signin attempt");

    let auth_response = app_state.auth_service.signin(payload).await?;
    let jar = jar.add(access_token_cookie(&auth_response, app_state.config.is_production()));

    Ok((jar, Json(auth_response)))
}

/// 現在のユーザー情報取得
pub async fn me_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<UserResponse>> {
    let current = app_state
        .auth_service
        .get_current_user(user.user_id())
        .await?;
    Ok(Json(current))
}

fn access_token_cookie(auth_response: &AuthResponse, secure: bool) -> Cookie<'static> {
    Cookie::build((
        ACCESS_TOKEN_COOKIE_NAME,
        auth_response.tokens.access_token.clone(),
    ))
    .http_only(true)
    .secure(secure)
    .same_site(SameSite::Lax)
    .path("/")
    .build()
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .route("/auth/me", get(me_handler))
        .with_state(app_state)
}
