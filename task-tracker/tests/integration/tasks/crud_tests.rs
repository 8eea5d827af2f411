// tests/integration/tasks/crud_tests.rs

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{app_helper, auth_helper, test_data};

#[tokio::test]
async fn test_create_task_with_authentication() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, task) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(json!({ "title": "Buy milk", "priority": "high" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(task["id"].is_i64());
    assert_eq!(task["userId"], user.id);
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["status"], "pending");
    assert_eq!(task["priority"], "high");
    assert!(task["description"].is_null());
    assert!(task["dueDate"].is_null());
    assert!(task["completedAt"].is_null());
    assert!(task["createdAt"].is_string());
    assert!(task["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_task_defaults_priority_to_medium() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, task) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(test_data::create_test_task()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["priority"], "medium");
    assert_eq!(task["description"], "This is a test task");
}

#[tokio::test]
async fn test_create_task_with_date_only_due_date() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, task) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(json!({ "title": "Pay rent", "dueDate": "2030-01-31" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let due = task["dueDate"].as_str().unwrap();
    assert!(due.starts_with("2030-01-31T00:00:00"), "{due}");
}

#[tokio::test]
async fn test_create_task_without_authentication() {
    let (app, _db) = app_helper::setup_app().await;

    let req = Request::builder()
        .uri("/tasks")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(test_data::create_test_task().to_string()))
        .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let error = auth_helper::response_json(res).await;
    assert_eq!(error["success"], false);
    assert_eq!(error["errorType"], "unauthorized");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let (app, _db) = app_helper::setup_app().await;

    let req = auth_helper::create_authenticated_request("GET", "/tasks", "not-a-jwt", None);
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_access_token_cookie_is_accepted() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let req = Request::builder()
        .uri("/tasks")
        .method("GET")
        .header("Cookie", format!("access_token={}", user.access_token))
        .body(Body::empty())
        .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_tasks_is_newest_first() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let mut created_ids = Vec::new();
    for title in ["first", "second", "third"] {
        let (_, task) = auth_helper::send_authenticated(
            &app,
            "POST",
            "/tasks",
            &user,
            Some(test_data::create_task_with_title(title)),
        )
        .await;
        created_ids.push(task["id"].as_i64().unwrap());
    }

    let (status, tasks) = auth_helper::send_authenticated(&app, "GET", "/tasks", &user, None).await;
    assert_eq!(status, StatusCode::OK);

    let tasks = tasks.as_array().unwrap();
    let listed_ids: Vec<i64> = tasks.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    created_ids.reverse();
    assert_eq!(listed_ids, created_ids);
    assert_eq!(tasks[0]["title"], "third");

    // createdAt も降順（同時刻はIDの降順）
    let created_at: Vec<&str> = tasks
        .iter()
        .map(|t| t["createdAt"].as_str().unwrap())
        .collect();
    for pair in created_at.windows(2) {
        let newer = chrono::DateTime::parse_from_rfc3339(pair[0]).unwrap();
        let older = chrono::DateTime::parse_from_rfc3339(pair[1]).unwrap();
        assert!(newer >= older);
    }
}

#[tokio::test]
async fn test_list_tasks_empty() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, tasks) = auth_helper::send_authenticated(&app, "GET", "/tasks", &user, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_get_task_by_id() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (_, created) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(test_data::create_test_task()),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, task) =
        auth_helper::send_authenticated(&app, "GET", &format!("/tasks/{}", id), &user, None).await;

    assert_eq!(status, StatusCode::OK);
    for field in ["id", "userId", "title", "description", "status", "priority"] {
        assert_eq!(task[field], created[field], "{field}");
    }
}

#[tokio::test]
async fn test_update_merges_fields() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (_, created) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(json!({
            "title": "Plan trip",
            "description": "Book flights",
            "priority": "low",
            "dueDate": "2030-05-01T09:00:00Z",
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = auth_helper::send_authenticated(
        &app,
        "PUT",
        &format!("/tasks/{}", id),
        &user,
        Some(json!({ "priority": "high" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["priority"], "high");
    assert_eq!(updated["title"], "Plan trip");
    assert_eq!(updated["description"], "Book flights");
    assert_eq!(updated["dueDate"], created["dueDate"]);
    assert_eq!(updated["status"], "pending");

    let created_updated_at =
        chrono::DateTime::parse_from_rfc3339(created["updatedAt"].as_str().unwrap()).unwrap();
    let updated_at =
        chrono::DateTime::parse_from_rfc3339(updated["updatedAt"].as_str().unwrap()).unwrap();
    assert!(updated_at >= created_updated_at);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_every_update_bumps_updated_at() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (_, created) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(test_data::create_task_with_title("Stamp me")),
    )
    .await;
    let uri = format!("/tasks/{}", created["id"]);
    let parse = |value: &serde_json::Value| {
        chrono::DateTime::parse_from_rfc3339(value.as_str().unwrap()).unwrap()
    };

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    // 変更内容のない更新でも updated_at は進む
    let (status, first) =
        auth_helper::send_authenticated(&app, "PUT", &uri, &user, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(parse(&first["updatedAt"]) > parse(&created["updatedAt"]));
    assert_eq!(first["createdAt"], created["createdAt"]);

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let (_, second) = auth_helper::send_authenticated(
        &app,
        "PUT",
        &uri,
        &user,
        Some(json!({ "status": "in-progress" })),
    )
    .await;
    assert!(parse(&second["updatedAt"]) > parse(&first["updatedAt"]));
    assert_eq!(second["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_clears_description_and_due_date() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (_, created) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(json!({
            "title": "Water plants",
            "description": "Balcony",
            "dueDate": "2030-05-01",
        })),
    )
    .await;
    let uri = format!("/tasks/{}", created["id"]);

    let (status, updated) = auth_helper::send_authenticated(
        &app,
        "PUT",
        &uri,
        &user,
        Some(json!({ "description": null, "dueDate": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["description"].is_null());
    assert!(updated["dueDate"].is_null());

    // 空文字の説明もクリア扱い
    auth_helper::send_authenticated(
        &app,
        "PUT",
        &uri,
        &user,
        Some(json!({ "description": "Kitchen" })),
    )
    .await;
    let (_, updated) = auth_helper::send_authenticated(
        &app,
        "PUT",
        &uri,
        &user,
        Some(json!({ "description": "" })),
    )
    .await;
    assert!(updated["description"].is_null());

    let (_, fetched) = auth_helper::send_authenticated(&app, "GET", &uri, &user, None).await;
    assert!(fetched["description"].is_null());
}

#[tokio::test]
async fn test_delete_task() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (_, created) = auth_helper::send_authenticated(
        &app,
        "POST",
        "/tasks",
        &user,
        Some(test_data::create_test_task()),
    )
    .await;
    let uri = format!("/tasks/{}", created["id"]);

    let (status, body) = auth_helper::send_authenticated(&app, "DELETE", &uri, &user, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted successfully" }));

    let (status, _) = auth_helper::send_authenticated(&app, "GET", &uri, &user, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, tasks) = auth_helper::send_authenticated(&app, "GET", "/tasks", &user, None).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_delete_nonexistent_task_returns_not_found() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, error) =
        auth_helper::send_authenticated(&app, "DELETE", "/tasks/999999", &user, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Task not found");
    assert_eq!(error["errorType"], "not_found");
}
