// task-tracker/src/api/mod.rs
use crate::config::AppConfig;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{
    cors_layer, jwt_auth_middleware, security_headers_middleware, AuthMiddlewareConfig,
};
use crate::repository::user_repository::UserRepository;
use crate::service::{auth_service::AuthService, task_service::TaskService};
use crate::utils::jwt::{JwtError, JwtManager};
use crate::utils::password::PasswordManager;
use axum::{middleware as axum_middleware, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub task_service: Arc<TaskService>,
    pub jwt_manager: Arc<JwtManager>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: DatabaseConnection, app_config: &AppConfig) -> Result<Self, JwtError> {
        let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

        Ok(Self {
            auth_service: Arc::new(AuthService::new(
                user_repo,
                Arc::new(PasswordManager::new()),
                jwt_manager.clone(),
            )),
            task_service: Arc::new(TaskService::new(db_pool)),
            jwt_manager,
            config: Arc::new(app_config.clone()),
        })
    }
}

/// 全ルーターとミドルウェアを組み立てる
pub fn create_app(app_state: AppState) -> Router {
    let auth_config = AuthMiddlewareConfig::new(app_state.jwt_manager.clone());
    let cors = cors_layer(&app_state.config.cors_allowed_origins);

    Router::new()
        .merge(handlers::task_handler::task_router(app_state.clone()))
        .merge(handlers::auth_handler::auth_router(app_state))
        .merge(handlers::system_handler::system_router())
        // 後に追加したレイヤーほど外側で実行される
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn_with_state(
            auth_config,
            jwt_auth_middleware,
        ))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
