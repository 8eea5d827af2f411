// task-tracker-client/src/view/list.rs

use super::item::TaskItemView;
use crate::model::Task;
use chrono::{DateTime, Utc};

pub const EMPTY_MESSAGE: &str = "No tasks found. Create your first task!";

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView {
    pub items: Vec<TaskItemView>,
}

impl TaskListView {
    pub fn new(tasks: &[&Task], now: DateTime<Utc>) -> Self {
        Self {
            items: tasks.iter().map(|t| TaskItemView::new(t, now)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return format!("{}\n", EMPTY_MESSAGE);
        }
        self.items.iter().map(TaskItemView::render).collect()
    }
}
