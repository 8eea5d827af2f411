// task-tracker/src/config/mod.rs
pub mod app;

pub use app::AppConfig;

// Backward compatibility
pub type Config = AppConfig;
