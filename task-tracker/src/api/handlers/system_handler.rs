// task-tracker/src/api/handlers/system_handler.rs
use axum::{routing::get, Router};

pub async fn health_check() -> &'static str {
    "OK"
}

pub fn system_router() -> Router {
    Router::new().route("/health", get(health_check))
}
