//! Task list page, reachable only with a stored token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Access is enforced by `components::route_guard`, not here. The page reads
//! `TasksState` from context, offers a status filter, and owns the explicit
//! sign-out action.

#[cfg(test)]
#[path = "task_list_test.rs"]
mod task_list_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::task_card::TaskCard;
use crate::routes::RouteName;
use crate::state::auth::AuthSession;
use crate::state::tasks::{StatusFilter, TaskSummary, TasksState};

/// Header line, e.g. `"1 of 3 done"`.
pub fn summary_line(summary: TaskSummary) -> String {
    if summary.total == 0 {
        return "No tasks".to_owned();
    }
    format!("{} of {} done", summary.completed, summary.total)
}

/// Message shown when nothing matches `filter`.
pub fn empty_message(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "No tasks yet.",
        StatusFilter::Incomplete => "Nothing left to do.",
        StatusFilter::Completed => "No completed tasks.",
    }
}

#[component]
pub fn TaskListPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let navigate = use_navigate();
    let filter = RwSignal::new(StatusFilter::default());
    let info = RwSignal::new(String::new());

    let visible = move || tasks.with(|s| s.visible(filter.get()));
    let summary = move || summary_line(tasks.with(TasksState::summary));

    let on_sign_out = move |_| match session.logout() {
        Ok(()) => navigate(RouteName::Login.path(), NavigateOptions::default()),
        Err(e) => info.set(format!("Sign-out failed: {e}")),
    };

    let filter_buttons = StatusFilter::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class="task-filter"
                    class:task-filter--active=move || filter.get() == option
                    on:click=move |_| filter.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="task-list-page">
            <header class="task-list-header">
                <h1>"Tasks"</h1>
                <span class="task-list-header__summary">{summary}</span>
                <button class="task-list-header__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <Show when=move || !info.get().is_empty()>
                <p class="task-list-message">{move || info.get()}</p>
            </Show>
            <nav class="task-filters">{filter_buttons}</nav>
            <Show
                when=move || !visible().is_empty()
                fallback=move || view! { <p class="task-list-empty">{move || empty_message(filter.get())}</p> }
            >
                <ul class="task-list">
                    <For each=visible key=|task| task.id children=|task| view! { <TaskCard task/> }/>
                </ul>
            </Show>
        </div>
    }
}
