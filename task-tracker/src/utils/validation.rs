// task-tracker/src/utils/validation.rs

//! 共通バリデーション定数と関数
//!
//! DTOのバリデーションルールをここで一元管理する。

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// ユーザー名の制約
pub mod username {
    pub const MIN_LENGTH: u64 = 3;
    pub const MAX_LENGTH: u64 = 30;
}

/// パスワードの制約
pub mod password {
    pub const MIN_LENGTH: u64 = 8;
    pub const MAX_LENGTH: u64 = 128;
}

/// タスク関連の制約
pub mod task {
    pub const TITLE_MAX_LENGTH: u64 = 255;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 5000;
}

/// 必須フィールドの制約
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

/// ユーザー名用正規表現（文字、数字、アンダースコアのみ）
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Invalid username regex"));

/// ユーザー名の形式をバリデーション
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !USERNAME_REGEX.is_match(username) {
        let mut error = ValidationError::new("invalid_username_format");
        error.message =
            Some("Username may only contain letters, digits and underscores".into());
        return Err(error);
    }
    Ok(())
}

/// タスクタイトルのバリデーション
///
/// 保存時と同じく前後の空白を除いた文字数で長さを判定する。
pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        let mut error = ValidationError::new("title_required");
        error.message = Some("Title is required".into());
        return Err(error);
    }

    if trimmed.chars().count() as u64 > task::TITLE_MAX_LENGTH {
        let mut error = ValidationError::new("length");
        error.message = Some("Title must not exceed 255 characters".into());
        return Err(error);
    }

    if title.contains('\0') {
        let mut error = ValidationError::new("invalid_characters");
        error.message = Some("Title cannot contain null characters".into());
        return Err(error);
    }

    Ok(())
}
