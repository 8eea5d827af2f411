// task-tracker/src/api/dto/task_dto.rs
use crate::domain::task_model;
use crate::domain::task_priority::TaskPriority;
use crate::domain::task_status::TaskStatus;
use crate::types::datetime::{due_date_update, optional_due_date};
use crate::types::FieldUpdate;
use crate::utils::validation::{self, task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    // 未指定でもデシリアライズし、バリデーションで必須エラーにする
    #[serde(default)]
    #[validate(custom(function = validation::validate_task_title))]
    pub title: String,

    #[validate(length(
        max = task::DESCRIPTION_MAX_LENGTH,
        message = "Description must not exceed 5000 characters"
    ))]
    pub description: Option<String>,

    pub priority: Option<TaskPriority>,

    #[serde(default, deserialize_with = "optional_due_date::deserialize")]
    pub due_date: Option<DateTime<Utc>>,
}

/// 部分更新リクエスト
///
/// `description` と `dueDate` は `null` または空文字で明示的にクリアできる。
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskDto {
    #[validate(custom(function = validation::validate_task_title))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(custom(function = validate_description_update))]
    #[serde(default, skip_serializing_if = "FieldUpdate::is_absent")]
    pub description: FieldUpdate<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    #[serde(
        default,
        deserialize_with = "due_date_update::deserialize",
        skip_serializing_if = "FieldUpdate::is_absent"
    )]
    pub due_date: FieldUpdate<DateTime<Utc>>,
}

fn validate_description_update(value: &FieldUpdate<String>) -> Result<(), ValidationError> {
    if let FieldUpdate::Set(description) = value {
        if description.chars().count() as u64 > task::DESCRIPTION_MAX_LENGTH {
            let mut error = ValidationError::new("length");
            error.message = Some("Description must not exceed 5000 characters".into());
            return Err(error);
        }
    }
    Ok(())
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// SeaORM の Model から TaskDto への変換
impl From<task_model::Model> for TaskDto {
    fn from(model: task_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            status: model.task_status(),
            priority: model.task_priority(),
            title: model.title,
            description: model.description,
            due_date: model.due_date,
            completed_at: model.completed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteTaskResponse {
    pub message: String,
}

impl DeleteTaskResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
        }
    }
}
