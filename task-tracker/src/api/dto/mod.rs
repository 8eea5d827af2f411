// task-tracker/src/api/dto/mod.rs

pub mod auth_dto;
pub mod task_dto;
