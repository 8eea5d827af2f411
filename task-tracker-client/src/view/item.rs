// task-tracker-client/src/view/item.rs

use crate::controller::UserIntent;
use crate::model::{Task, TaskStatus};
use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusButton {
    pub label: &'static str,
    pub status: TaskStatus,
    pub active: bool,
}

/// 一件分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItemView {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status_badge: String,
    pub priority_badge: String,
    pub due_label: String,
    pub completed_label: Option<String>,
    pub overdue: bool,
    pub status_buttons: Vec<StatusButton>,
    task: Task,
}

impl TaskItemView {
    pub fn new(task: &Task, now: DateTime<Utc>) -> Self {
        let due_label = match task.due_date {
            Some(due) => format!("Due: {}", due.format(DATE_FORMAT)),
            None => "Due: No due date".to_string(),
        };
        let overdue = task
            .due_date
            .is_some_and(|due| task.status != TaskStatus::Completed && due < now);

        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone().filter(|d| !d.is_empty()),
            status_badge: task.status.to_string(),
            priority_badge: format!("{} priority", task.priority),
            due_label,
            completed_label: task
                .completed_at
                .map(|at| format!("Completed: {}", at.format(DATE_FORMAT))),
            overdue,
            status_buttons: TaskStatus::all()
                .into_iter()
                .map(|status| StatusButton {
                    label: status.button_label(),
                    status,
                    active: task.status == status,
                })
                .collect(),
            task: task.clone(),
        }
    }

    pub fn edit_intent(&self) -> UserIntent {
        UserIntent::Edit(self.task.clone())
    }

    pub fn delete_intent(&self) -> UserIntent {
        UserIntent::Delete(self.id)
    }

    pub fn status_intent(&self, status: TaskStatus) -> UserIntent {
        UserIntent::ChangeStatus {
            id: self.id,
            status,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("#{} {}", self.id, self.title);
        if self.overdue {
            out.push_str(" (overdue)");
        }
        out.push_str("  [Edit] [Delete]\n");

        if let Some(description) = &self.description {
            out.push_str(&format!("    {}\n", description));
        }

        out.push_str(&format!(
            "    [{}] {} | {}",
            self.status_badge, self.priority_badge, self.due_label
        ));
        if let Some(completed) = &self.completed_label {
            out.push_str(&format!(" | {}", completed));
        }
        out.push('\n');

        let buttons: Vec<String> = self
            .status_buttons
            .iter()
            .map(|b| {
                if b.active {
                    format!("[*{}]", b.label)
                } else {
                    format!("[{}]", b.label)
                }
            })
            .collect();
        out.push_str(&format!("    {}\n", buttons.join(" ")));
        out
    }
}
