// task-tracker/src/api/handlers/mod.rs

pub mod auth_handler;
pub mod system_handler;
pub mod task_handler;
