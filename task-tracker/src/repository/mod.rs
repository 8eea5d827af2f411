// task-tracker/src/repository/mod.rs

pub mod task_repository;
pub mod user_repository;
