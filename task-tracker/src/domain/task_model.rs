// task-tracker/src/domain/task_model.rs
use super::task_priority::TaskPriority;
use super::task_status::TaskStatus;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: String,   // 'pending', 'in-progress', 'completed'
    pub priority: String, // 'low', 'medium', 'high'
    #[sea_orm(nullable)]
    pub due_date: Option<DateTime<Utc>>,
    #[sea_orm(nullable)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::UserId",
        to = "super::user_model::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            status: Set(TaskStatus::default().to_string()),
            priority: Set(TaskPriority::default().to_string()),
            completed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            // 更新の場合は必ず updated_at を更新
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl Model {
    /// 保存されているステータス（不正値は既定値扱い）
    pub fn task_status(&self) -> TaskStatus {
        self.status.parse().unwrap_or_default()
    }

    pub fn task_priority(&self) -> TaskPriority {
        self.priority.parse().unwrap_or_default()
    }
}

/// ステータス更新後の完了日時を決定する
///
/// 完了への遷移時のみ現在時刻を設定し、完了のまま更新された場合は既存の値を保持する。
/// 完了以外のステータスでは常にクリアする。
pub fn resolve_completed_at(
    prior_status: TaskStatus,
    prior_completed_at: Option<DateTime<Utc>>,
    new_status: TaskStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match new_status {
        TaskStatus::Completed if !prior_status.is_completed() => Some(now),
        TaskStatus::Completed => prior_completed_at.or(Some(now)),
        TaskStatus::Pending | TaskStatus::InProgress => None,
    }
}
