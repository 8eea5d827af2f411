// task-tracker/src/api/handlers/task_handler.rs
use crate::api::dto::task_dto::{CreateTaskDto, DeleteTaskResponse, TaskDto, UpdateTaskDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{AppJson, ValidatedPath};
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

// --- CRUD Handlers ---

pub async fn list_tasks_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<TaskDto>>> {
    let tasks = app_state
        .task_service
        .list_tasks_for_user(user.user_id())
        .await?;

    info!(user_id = %user.user_id(), count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

pub async fn get_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<TaskDto>> {
    let task = app_state
        .task_service
        .get_task_for_user(user.user_id(), id)
        .await?;
    Ok(Json(task))
}

pub async fn create_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateTaskDto>,
) -> AppResult<impl IntoResponse> {
    let task = app_state
        .task_service
        .create_task_for_user(user.user_id(), payload)
        .await?;

    info!(user_id = %user.user_id(), task_id = %task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
    AppJson(payload): AppJson<UpdateTaskDto>,
) -> AppResult<Json<TaskDto>> {
    let task = app_state
        .task_service
        .update_task_for_user(user.user_id(), id, payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        task_id = %task.id,
        status = %task.status,
        "Task updated"
    );
    Ok(Json(task))
}

pub async fn delete_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<DeleteTaskResponse>> {
    let response = app_state
        .task_service
        .delete_task_for_user(user.user_id(), id)
        .await?;

    info!(user_id = %user.user_id(), task_id = %id, "Task deleted");
    Ok(Json(response))
}

// --- Router Setup ---

pub fn task_router(app_state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .with_state(app_state)
}
