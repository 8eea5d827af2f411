// tests/common/auth_helper.rs

use axum::{
    body::{self, Body},
    http::{Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use task_tracker::api::dto::auth_dto::SignupRequest;
use tower::ServiceExt;

use crate::common::test_data;

/// テスト用のユーザー情報
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub access_token: String,
}

/// ユーザー登録を実行し、認証情報を返す
pub async fn signup_test_user(app: &Router, signup_data: SignupRequest) -> Result<TestUser, String> {
    let req = Request::builder()
        .uri("/auth/signup")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&signup_data).unwrap()))
        .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let response = response_json(res).await;

    if status != StatusCode::CREATED {
        return Err(format!("Signup failed: {:?}", response));
    }

    Ok(TestUser {
        id: response["user"]["id"].as_i64().unwrap() as i32,
        email: signup_data.email,
        username: signup_data.username,
        access_token: response["tokens"]["accessToken"]
            .as_str()
            .unwrap()
            .to_string(),
    })
}

/// ランダムなユーザーを登録して返す
pub async fn create_and_authenticate_user(app: &Router) -> TestUser {
    signup_test_user(app, test_data::create_test_signup_data())
        .await
        .expect("signup test user")
}

/// 認証ヘッダー付きリクエストを作成
pub fn create_authenticated_request(
    method: &str,
    uri: &str,
    access_token: &str,
    body: Option<Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .uri(uri)
        .method(method)
        .header("Authorization", format!("Bearer {}", access_token));

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// 認証付きでリクエストを送り、ステータスとJSONボディを返す
pub async fn send_authenticated(
    app: &Router,
    method: &str,
    uri: &str,
    user: &TestUser,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let req = create_authenticated_request(method, uri, &user.access_token, body);
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    (status, response_json(res).await)
}

pub async fn response_json(res: Response<Body>) -> Value {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    })
}
