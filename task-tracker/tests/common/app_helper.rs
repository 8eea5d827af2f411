// tests/common/app_helper.rs

use axum::Router;
use task_tracker::{api::create_app, config::AppConfig, AppState};

use crate::common::{self, db::TestDatabase};

/// マイグレーション済みDBとルーター一式をセットアップ
pub async fn setup_app() -> (Router, TestDatabase) {
    common::init_test_env();
    let db = TestDatabase::sqlite().await;
    let app = build_app(&db);
    (app, db)
}

pub fn build_app(db: &TestDatabase) -> Router {
    let app_config = AppConfig::for_testing();
    let app_state =
        AppState::new(db.connection.clone(), &app_config).expect("build app state");
    create_app(app_state)
}
