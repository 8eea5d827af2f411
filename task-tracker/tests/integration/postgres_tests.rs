// tests/integration/postgres_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{app_helper, auth_helper, db::TestDatabase, init_test_env};

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_task_lifecycle_on_postgres() {
    init_test_env();
    let db = TestDatabase::postgres().await;
    let app = app_helper::build_app(&db);
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, task) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(json!({ "title": "Buy milk", "priority": "high", "dueDate": "2030-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/tasks/{}", task["id"]);

    let (_, completed) = auth_helper::send_authenticated(
        &app,
        "PUT",
        &uri,
        &user,
        Some(json!({ "status": "completed", "dueDate": null })),
    )
    .await;
    assert!(completed["completedAt"].is_string());
    assert!(completed["dueDate"].is_null());

    let (status, _) = auth_helper::send_authenticated(&app, "DELETE", &uri, &user, None).await;
    assert_eq!(status, StatusCode::OK);
}
