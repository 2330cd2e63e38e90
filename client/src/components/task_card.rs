//! Card component for a single task in the task list.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::net::types::{Task, TaskStatus};

/// CSS modifier for the status badge.
pub fn status_badge_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Incomplete => "task-card__status task-card__status--incomplete",
        TaskStatus::Completed => "task-card__status task-card__status--completed",
    }
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let completed = task.is_completed();
    let description = (!task.description.trim().is_empty()).then_some(task.description);

    view! {
        <li class="task-card" class:task-card--completed=completed data-task-id=task.id.to_string()>
            <div class="task-card__header">
                <span class="task-card__title">{task.title}</span>
                <span class=status_badge_class(task.status)>{task.status.label()}</span>
            </div>
            {description.map(|text| view! { <p class="task-card__description">{text}</p> })}
        </li>
    }
}
