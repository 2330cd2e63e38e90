//! Task list view state.
//!
//! Holds the tasks rendered by the task list page. Nothing here persists or
//! syncs; the list lives only as long as the page.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::cmp::Reverse;

use crate::net::types::{Task, TaskStatus};

/// Which tasks the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Incomplete,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Incomplete, Self::Completed];

    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Incomplete => status == TaskStatus::Incomplete,
            Self::Completed => status == TaskStatus::Completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Incomplete => TaskStatus::Incomplete.label(),
            Self::Completed => TaskStatus::Completed.label(),
        }
    }
}

/// Per-status task counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
}

#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
}

impl TasksState {
    pub fn new(items: Vec<Task>) -> Self {
        Self { items }
    }

    /// Tasks passing `filter`, newest first; ties by descending id.
    pub fn visible(&self, filter: StatusFilter) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.items.iter().filter(|t| filter.matches(t.status)).cloned().collect();
        tasks.sort_by_key(|t| (Reverse(t.created_at), Reverse(t.id)));
        tasks
    }

    pub fn summary(&self) -> TaskSummary {
        let completed = self.items.iter().filter(|t| t.is_completed()).count();
        TaskSummary { total: self.items.len(), completed, incomplete: self.items.len() - completed }
    }
}
