// task-tracker-client/src/lib.rs
pub mod api;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use controller::{FormState, TaskManager, UserIntent};
pub use error::{ClientError, ClientResult};
pub use model::{Filter, Task, TaskPriority, TaskStatus};
