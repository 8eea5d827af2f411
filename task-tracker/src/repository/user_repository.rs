// task-tracker/src/repository/user_repository.rs

use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::entity::*;
use sea_orm::{Condition, DbConn, DbErr, PaginatorTrait, QueryFilter};

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id).one(&self.db).await
    }

    /// メールアドレスまたはユーザー名でユーザーを検索
    pub async fn find_by_email_or_username(
        &self,
        identifier: &str,
    ) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(
                Condition::any()
                    .add(user_model::Column::Email.eq(identifier))
                    .add(user_model::Column::Username.eq(identifier)),
            )
            .one(&self.db)
            .await
    }

    pub async fn is_username_taken(&self, username: &str) -> Result<bool, DbErr> {
        let count = UserEntity::find()
            .filter(user_model::Column::Username.eq(username))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn is_email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = UserEntity::find()
            .filter(user_model::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<user_model::Model, DbErr> {
        let user = UserActiveModel {
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            ..UserActiveModel::new()
        };
        user.insert(&self.db).await
    }
}
