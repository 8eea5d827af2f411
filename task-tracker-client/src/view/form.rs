// task-tracker-client/src/view/form.rs

use crate::controller::FormState;
use crate::error::{ClientError, ClientResult};
use crate::model::{CreateTaskRequest, Task, TaskPriority, UpdateTaskRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// フォームの入力値
///
/// `due_date` は `YYYY-MM-DD` 形式、未入力は空文字。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub due_date: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation("Title is required".to_string()));
        }
        Ok(())
    }

    pub fn to_create_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            title: self.title.trim().to_string(),
            description: non_blank(&self.description),
            priority: self.priority,
            due_date: non_blank(&self.due_date),
        }
    }

    /// 空欄の説明・期限はクリアとして送信する
    pub fn to_update_request(&self) -> UpdateTaskRequest {
        UpdateTaskRequest {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: None,
            priority: Some(self.priority),
            due_date: Some(self.due_date.trim().to_string()),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub mode: FormMode,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub values: TaskForm,
}

impl FormView {
    /// フォームが開いていなければ `None`
    pub fn from_state(state: &FormState) -> Option<Self> {
        match state {
            FormState::Hidden => None,
            FormState::Creating => Some(Self {
                mode: FormMode::Create,
                heading: "Add New Task",
                submit_label: "Create Task",
                values: TaskForm::default(),
            }),
            FormState::Editing(task) => Some(Self {
                mode: FormMode::Edit,
                heading: "Edit Task",
                submit_label: "Update Task",
                values: TaskForm::from_task(task),
            }),
        }
    }

    pub fn render(&self) -> String {
        let due = if self.values.due_date.is_empty() {
            "-"
        } else {
            self.values.due_date.as_str()
        };
        format!(
            "== {} ==\nTitle: {}\nDescription: {}\nPriority: {}\nDue date: {}\n[{}] [Cancel]\n",
            self.heading,
            self.values.title,
            self.values.description,
            self.values.priority,
            due,
            self.submit_label
        )
    }
}
