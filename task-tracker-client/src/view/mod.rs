// task-tracker-client/src/view/mod.rs

//! 画面のビューモデルとテキスト描画

pub mod form;
pub mod item;
pub mod list;

pub use form::{FormMode, FormView, TaskForm};
pub use item::{StatusButton, TaskItemView};
pub use list::{TaskListView, EMPTY_MESSAGE};

use crate::controller::FormState;
use crate::model::{Filter, Task};
use chrono::{DateTime, Utc};

pub const FILTER_OPTIONS: [&str; 4] = ["all", "pending", "in-progress", "completed"];

/// 画面全体を描画する
pub fn render_screen(
    filter: Filter,
    form: &FormState,
    tasks: &[&Task],
    now: DateTime<Utc>,
) -> String {
    let mut out = String::from("Task Manager\n");
    out.push_str(&format!(
        "Filter: {} [{}]\n",
        filter.label(),
        FILTER_OPTIONS.join(" | ")
    ));

    if let Some(form_view) = FormView::from_state(form) {
        out.push('\n');
        out.push_str(&form_view.render());
    }

    out.push('\n');
    out.push_str(&TaskListView::new(tasks, now).render());
    out
}
