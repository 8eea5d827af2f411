// task-tracker/src/logging/mod.rs

//! リクエスト単位の構造化ログ
//!
//! `inject_request_context` がリクエストIDと操作種別を決め、認証ミドルウェアが
//! ユーザーIDを埋め、`logging_middleware` が開始と完了を出力する。
//! リクエストIDは `x-request-id` としてレスポンスにも返す。

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Level;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(message = $msg $(, $($key = ?$value,)*)?);
            }
            tracing::Level::WARN => {
                tracing::warn!(message = $msg $(, $($key = ?$value,)*)?);
            }
            tracing::Level::INFO => {
                tracing::info!(message = $msg $(, $($key = ?$value,)*)?);
            }
            tracing::Level::DEBUG => {
                tracing::debug!(message = $msg $(, $($key = ?$value,)*)?);
            }
            _ => {}
        }
    };
}

/// リクエストが対象とするAPI操作
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    ListTasks,
    GetTask,
    CreateTask,
    UpdateTask,
    DeleteTask,
    Auth,
    Health,
    Other,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListTasks => "list_tasks",
            Self::GetTask => "get_task",
            Self::CreateTask => "create_task",
            Self::UpdateTask => "update_task",
            Self::DeleteTask => "delete_task",
            Self::Auth => "auth",
            Self::Health => "health",
            Self::Other => "other",
        }
    }

    /// メソッドとパスから操作と対象タスクIDを決める
    pub fn classify(method: &Method, path: &str) -> (Self, Option<i32>) {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        match segments.as_slice() {
            ["tasks"] if *method == Method::GET => (Self::ListTasks, None),
            ["tasks"] if *method == Method::POST => (Self::CreateTask, None),
            ["tasks", id] => {
                let operation = if *method == Method::GET {
                    Self::GetTask
                } else if *method == Method::PUT {
                    Self::UpdateTask
                } else if *method == Method::DELETE {
                    Self::DeleteTask
                } else {
                    Self::Other
                };
                (operation, id.parse().ok())
            }
            ["auth", ..] => (Self::Auth, None),
            ["health"] => (Self::Health, None),
            _ => (Self::Other, None),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub method: Method,
    pub path: String,
    pub operation: Operation,
    pub task_id: Option<i32>,
    /// 認証ミドルウェアが設定する
    pub user_id: Option<i32>,
}

impl RequestContext {
    /// 受信した `x-request-id` が妥当ならそれを引き継ぎ、なければ採番する
    pub fn from_request(req: &Request<Body>) -> Self {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|id| is_valid_request_id(id))
            .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);
        let path = req.uri().path().to_string();
        let (operation, task_id) = Operation::classify(req.method(), &path);

        Self {
            request_id,
            method: req.method().clone(),
            path,
            operation,
            task_id,
            user_id: None,
        }
    }
}

fn is_valid_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// 完了ログのレベル
pub fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let Some(context) = req.extensions().get::<RequestContext>().cloned() else {
        return next.run(req).await;
    };

    // ヘルスチェックは頻度が高いのでDEBUG
    let start_level = if context.operation == Operation::Health {
        Level::DEBUG
    } else {
        Level::INFO
    };
    log_with_context!(
        start_level,
        "Request started",
        "request_id" => &context.request_id,
        "operation" => context.operation.as_str(),
        "method" => &context.method,
        "path" => &context.path,
        "task_id" => context.task_id,
        "user_id" => context.user_id,
    );

    let start = Instant::now();
    let response = next.run(req).await;
    let status = response.status();

    let level = match completion_level(status) {
        Level::INFO => start_level,
        level => level,
    };
    log_with_context!(
        level,
        "Request completed",
        "request_id" => &context.request_id,
        "operation" => context.operation.as_str(),
        "status" => status.as_u16(),
        "duration_ms" => start.elapsed().as_millis(),
        "task_id" => context.task_id,
        "user_id" => context.user_id,
    );

    response
}

pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext::from_request(&req);
    let request_id = context.request_id.clone();
    req.extensions_mut().insert(context);

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
