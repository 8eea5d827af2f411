// tests/common/test_data.rs

use serde_json::{json, Value};
use task_tracker::api::dto::auth_dto::{SigninRequest, SignupRequest};

pub const TEST_PASSWORD: &str = "MyUniqueP@ssw0rd91";

// === 認証関連のテストデータ ===

/// テスト用のユーザー登録データを生成
pub fn create_test_signup_data() -> SignupRequest {
    let suffix = &uuid::Uuid::new_v4().simple().to_string()[..8];
    SignupRequest {
        email: format!("test{}@example.com", suffix),
        username: format!("testuser_{}", suffix),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn create_signup_data_with_info(email: &str, username: &str, password: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    }
}

pub fn create_signin_data(identifier: &str, password: &str) -> SigninRequest {
    SigninRequest {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

// === タスク関連のテストデータ ===

pub fn create_test_task() -> Value {
    json!({
        "title": "Test Task",
        "description": "This is a test task",
    })
}

pub fn create_task_with_title(title: &str) -> Value {
    json!({ "title": title })
}
