// tests/integration/auth/auth_tests.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use crate::common::{app_helper, auth_helper, test_data};

#[tokio::test]
async fn test_signup_returns_user_and_tokens() {
    let (app, _db) = app_helper::setup_app().await;
    let signup = test_data::create_test_signup_data();

    let req = Request::builder()
        .uri("/auth/signup")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&signup).unwrap()))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));

    let body = auth_helper::response_json(res).await;
    assert_eq!(body["user"]["username"], signup.username);
    assert_eq!(body["user"]["email"], signup.email);
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(body["tokens"]["tokenType"], "Bearer");
    assert_eq!(body["tokens"]["expiresIn"], 3600);
    assert!(body["tokens"]["accessToken"].is_string());
}

#[tokio::test]
async fn test_signup_duplicate_username_conflicts() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let duplicate = test_data::create_signup_data_with_info(
        "another@example.com",
        &user.username,
        test_data::TEST_PASSWORD,
    );
    let err = auth_helper::signup_test_user(&app, duplicate)
        .await
        .unwrap_err();
    assert!(err.contains("username is already taken"), "{err}");

    let duplicate = test_data::create_signup_data_with_info(
        &user.email,
        "another_user",
        test_data::TEST_PASSWORD,
    );
    let err = auth_helper::signup_test_user(&app, duplicate)
        .await
        .unwrap_err();
    assert!(err.contains("conflict"), "{err}");
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let (app, _db) = app_helper::setup_app().await;

    let weak = test_data::create_signup_data_with_info("weak@example.com", "weak_user", "short");
    let err = auth_helper::signup_test_user(&app, weak).await.unwrap_err();
    assert!(err.contains("validation_errors"), "{err}");
}

#[tokio::test]
async fn test_signin_with_username_and_email() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    for identifier in [&user.username, &user.email] {
        let signin = test_data::create_signin_data(identifier, test_data::TEST_PASSWORD);
        let req = Request::builder()
            .uri("/auth/signin")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&signin).unwrap()))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = auth_helper::response_json(res).await;
        assert_eq!(body["user"]["id"], user.id);
    }
}

#[tokio::test]
async fn test_signin_with_wrong_password_is_unauthorized() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    for (identifier, password) in [
        (user.username.as_str(), "WrongPassword123"),
        ("nobody_here", test_data::TEST_PASSWORD),
    ] {
        let signin = test_data::create_signin_data(identifier, password);
        let req = Request::builder()
            .uri("/auth/signin")
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&signin).unwrap()))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body = auth_helper::response_json(res).await;
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let (app, _db) = app_helper::setup_app().await;
    let user = auth_helper::create_and_authenticate_user(&app).await;

    let (status, body) =
        auth_helper::send_authenticated(&app, "GET", "/auth/me", &user, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id);
    assert_eq!(body["username"], user.username);
}

#[tokio::test]
async fn test_me_requires_authentication() {
    let (app, _db) = app_helper::setup_app().await;

    let req = Request::builder()
        .uri("/auth/me")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
