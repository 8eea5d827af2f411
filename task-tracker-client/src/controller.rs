// task-tracker-client/src/controller.rs

//! クライアント側の状態管理
//!
//! 変更系の操作が成功するたびに一覧を再取得し、フィルターは
//! 取得済みの一覧に対してローカルで適用する。

use crate::api::TaskApi;
use crate::error::{ClientError, ClientResult};
use crate::model::{Filter, Task, TaskStatus, UpdateTaskRequest};
use crate::view::{self, TaskForm};
use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

/// フォームの開閉状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Hidden,
    Creating,
    Editing(Task),
}

/// 画面から発生する操作
#[derive(Debug, Clone, PartialEq)]
pub enum UserIntent {
    Refresh,
    ShowCreateForm,
    Edit(Task),
    CancelForm,
    SubmitForm(TaskForm),
    ChangeStatus { id: i32, status: TaskStatus },
    Delete(i32),
    SetFilter(Filter),
}

pub struct TaskManager<A: TaskApi> {
    api: A,
    tasks: Vec<Task>,
    filter: Filter,
    form: FormState,
}

impl<A: TaskApi> TaskManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            filter: Filter::All,
            form: FormState::Hidden,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// 初回表示時の読み込み
    pub async fn mount(&mut self) -> ClientResult<()> {
        self.refresh().await
    }

    /// 一覧を再取得する。失敗時は直前の一覧を保持する
    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Fetched tasks");
                self.tasks = tasks;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching tasks");
                Err(e)
            }
        }
    }

    pub async fn create_task(&mut self, form: &TaskForm) -> ClientResult<()> {
        form.validate()?;

        if let Err(e) = self.api.create_task(&form.to_create_request()).await {
            error!(error = %e, "Error creating task");
            return Err(e);
        }

        // 再取得の失敗は作成結果に影響させない
        let _ = self.refresh().await;
        self.form = FormState::Hidden;
        Ok(())
    }

    pub async fn update_task(&mut self, id: i32, request: &UpdateTaskRequest) -> ClientResult<()> {
        if let Err(e) = self.api.update_task(id, request).await {
            error!(task_id = id, error = %e, "Error updating task");
            return Err(e);
        }

        let _ = self.refresh().await;
        if matches!(self.form, FormState::Editing(_)) {
            self.form = FormState::Hidden;
        }
        Ok(())
    }

    pub async fn delete_task(&mut self, id: i32) -> ClientResult<()> {
        if let Err(e) = self.api.delete_task(id).await {
            error!(task_id = id, error = %e, "Error deleting task");
            return Err(e);
        }

        let _ = self.refresh().await;
        Ok(())
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn show_create_form(&mut self) {
        self.form = FormState::Creating;
    }

    pub fn edit(&mut self, task: Task) {
        self.form = FormState::Editing(task);
    }

    pub fn cancel_form(&mut self) {
        self.form = FormState::Hidden;
    }

    /// 現在のフィルターを適用した一覧
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// フォーム送信。作成か更新かはフォームの状態で決まる
    pub async fn submit_form(&mut self, form: &TaskForm) -> ClientResult<()> {
        let editing_id = match &self.form {
            FormState::Hidden => {
                warn!("Form submitted while hidden");
                return Err(ClientError::Validation("No form is open".to_string()));
            }
            FormState::Creating => None,
            FormState::Editing(task) => Some(task.id),
        };

        match editing_id {
            None => self.create_task(form).await,
            Some(id) => {
                form.validate()?;
                self.update_task(id, &form.to_update_request()).await
            }
        }
    }

    pub async fn dispatch(&mut self, intent: UserIntent) -> ClientResult<()> {
        match intent {
            UserIntent::Refresh => self.refresh().await,
            UserIntent::ShowCreateForm => {
                self.show_create_form();
                Ok(())
            }
            UserIntent::Edit(task) => {
                self.edit(task);
                Ok(())
            }
            UserIntent::CancelForm => {
                self.cancel_form();
                Ok(())
            }
            UserIntent::SubmitForm(form) => self.submit_form(&form).await,
            UserIntent::ChangeStatus { id, status } => {
                self.update_task(id, &UpdateTaskRequest::status(status))
                    .await
            }
            UserIntent::Delete(id) => self.delete_task(id).await,
            UserIntent::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(())
            }
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        view::render_screen(self.filter, &self.form, &self.filtered_tasks(), now)
    }
}
