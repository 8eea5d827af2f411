// tests/integration/tasks/ownership_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{app_helper, auth_helper, test_data};

#[tokio::test]
async fn test_tasks_are_scoped_to_owner() {
    let (app, _db) = app_helper::setup_app().await;
    let owner = auth_helper::create_and_authenticate_user(&app).await;
    let other = auth_helper::create_and_authenticate_user(&app).await;

    let (_, task) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &owner,
        Some(test_data::create_task_with_title("Private")),
    )
    .await;
    let uri = format!("/tasks/{}", task["id"]);

    // 他人からは一覧に出ない
    let (_, others_tasks) =
        auth_helper::send_authenticated(&app, "GET", "/tasks", &other, None).await;
    assert_eq!(others_tasks, json!([]));

    // 取得・更新・削除はいずれも NotFound で、データは返さない
    let (status, body) = auth_helper::send_authenticated(&app, "GET", &uri, &other, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");
    assert!(body.get("title").is_none());

    let (status, _) = auth_helper::send_authenticated(
        &app,
        "PUT",
        &uri,
        &other,
        Some(json!({ "title": "Hijacked", "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = auth_helper::send_authenticated(&app, "DELETE", &uri, &other, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 所有者のタスクは変更されていない
    let (status, unchanged) =
        auth_helper::send_authenticated(&app, "GET", &uri, &owner, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["title"], "Private");
    assert_eq!(unchanged["status"], "pending");
}

#[tokio::test]
async fn test_foreign_and_missing_ids_are_indistinguishable() {
    let (app, _db) = app_helper::setup_app().await;
    let owner = auth_helper::create_and_authenticate_user(&app).await;
    let other = auth_helper::create_and_authenticate_user(&app).await;

    let (_, task) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &owner,
        Some(test_data::create_test_task()),
    )
    .await;

    let (foreign_status, foreign_body) = auth_helper::send_authenticated(
        &app,
        "GET",
        &format!("/tasks/{}", task["id"]),
        &other,
        None,
    )
    .await;
    let (missing_status, missing_body) =
        auth_helper::send_authenticated(&app, "GET", "/tasks/424242", &other, None).await;

    assert_eq!(foreign_status, missing_status);
    assert_eq!(foreign_body, missing_body);
}
