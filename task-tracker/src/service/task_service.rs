// task-tracker/src/service/task_service.rs

use crate::api::dto::task_dto::{CreateTaskDto, DeleteTaskResponse, TaskDto, UpdateTaskDto};
use crate::db::DbPool;
use crate::domain::task_model::{self, resolve_completed_at, ActiveModel as TaskActiveModel};
use crate::error::{AppError, AppResult};
use crate::repository::task_repository::TaskRepository;
use chrono::Utc;
use sea_orm::{ActiveModelBehavior, DbErr, Set};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

/// タスクのCRUDと所有者スコープ・完了日時の管理
pub struct TaskService {
    repo: Arc<TaskRepository>,
}

impl TaskService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(TaskRepository::new(db_pool)),
        }
    }

    pub async fn list_tasks_for_user(&self, user_id: i32) -> AppResult<Vec<TaskDto>> {
        let tasks = self.repo.find_all_for_user(user_id).await?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }

    pub async fn get_task_for_user(&self, user_id: i32, id: i32) -> AppResult<TaskDto> {
        let task = self.find_owned(user_id, id).await?;
        Ok(task.into())
    }

    pub async fn create_task_for_user(
        &self,
        user_id: i32,
        payload: CreateTaskDto,
    ) -> AppResult<TaskDto> {
        payload.validate()?;

        let task = TaskActiveModel {
            user_id: Set(user_id),
            title: Set(payload.title.trim().to_string()),
            description: Set(payload.description.filter(|d| !d.trim().is_empty())),
            priority: Set(payload.priority.unwrap_or_default().to_string()),
            due_date: Set(payload.due_date),
            ..TaskActiveModel::new()
        };

        let created = self.repo.create(task).await?;
        Ok(created.into())
    }

    pub async fn update_task_for_user(
        &self,
        user_id: i32,
        id: i32,
        payload: UpdateTaskDto,
    ) -> AppResult<TaskDto> {
        payload.validate()?;

        let existing = self.find_owned(user_id, id).await?;
        let prior_status = existing.task_status();
        let prior_completed_at = existing.completed_at;
        let new_status = payload.status.unwrap_or(prior_status);

        // 説明と期限は Absent なら現状維持、Clear なら null
        let description = payload
            .description
            .clear_if_blank()
            .apply(existing.description.clone());
        let due_date = payload.due_date.apply(existing.due_date);

        let mut task: TaskActiveModel = existing.into();

        if let Some(title) = payload.title {
            task.title = Set(title.trim().to_string());
        }
        task.description = Set(description);
        if let Some(priority) = payload.priority {
            task.priority = Set(priority.to_string());
        }
        task.due_date = Set(due_date);

        let completed_at =
            resolve_completed_at(prior_status, prior_completed_at, new_status, Utc::now());
        debug!(
            task_id = id,
            from = %prior_status,
            to = %new_status,
            completed = completed_at.is_some(),
            "Resolved task status transition"
        );
        task.status = Set(new_status.to_string());
        task.completed_at = Set(completed_at);

        let updated = self.save_update(task).await?;
        Ok(updated.into())
    }

    pub async fn delete_task_for_user(
        &self,
        user_id: i32,
        id: i32,
    ) -> AppResult<DeleteTaskResponse> {
        let result = self.repo.delete_for_user(id, user_id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::task_not_found());
        }
        Ok(DeleteTaskResponse::deleted())
    }

    /// 存在しない・他人のタスクはどちらも NotFound
    async fn find_owned(&self, user_id: i32, id: i32) -> AppResult<task_model::Model> {
        self.repo
            .find_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(AppError::task_not_found)
    }

    /// 取得後に削除された行への更新も NotFound として返す
    async fn save_update(&self, task: TaskActiveModel) -> AppResult<task_model::Model> {
        self.repo.update(task).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => AppError::task_not_found(),
            e => e.into(),
        })
    }
}
