// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20250612_000001_create_users_table;
mod m20250612_000002_create_tasks_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // usersを先に作成（tasksが外部キーで参照する）
            Box::new(m20250612_000001_create_users_table::Migration),
            Box::new(m20250612_000002_create_tasks_table::Migration),
        ]
    }
}
