// task-tracker/src/repository/task_repository.rs

use crate::domain::task_model::{self, ActiveModel as TaskActiveModel, Entity as TaskEntity};
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::{DbConn, DbErr, DeleteResult};

/// タスクテーブルへのアクセス。全クエリは所有者IDで絞り込む
#[derive(Debug, Clone)]
pub struct TaskRepository {
    db: DbConn,
}

impl TaskRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーのタスクを作成日時の降順で全件取得
    pub async fn find_all_for_user(&self, user_id: i32) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .filter(task_model::Column::UserId.eq(user_id))
            .order_by_desc(task_model::Column::CreatedAt)
            .order_by_desc(task_model::Column::Id)
            .all(&self.db)
            .await
    }

    /// ユーザーが所有するタスクをIDで取得
    pub async fn find_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<task_model::Model>, DbErr> {
        TaskEntity::find_by_id(id)
            .filter(task_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    pub async fn create(&self, task: TaskActiveModel) -> Result<task_model::Model, DbErr> {
        task.insert(&self.db).await
    }

    /// 変更済みのActiveModelを保存する（updated_atはbefore_saveで更新される）
    pub async fn update(&self, task: TaskActiveModel) -> Result<task_model::Model, DbErr> {
        task.update(&self.db).await
    }

    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<DeleteResult, DbErr> {
        TaskEntity::delete_many()
            .filter(task_model::Column::Id.eq(id))
            .filter(task_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
