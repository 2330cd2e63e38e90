//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_guard` gates route views on the navigation guard; `task_card`
//! renders list items for the task list page.

pub mod route_guard;
pub mod task_card;
