// task-tracker/src/service/mod.rs

pub mod auth_service;
pub mod task_service;
