//! Data shapes exchanged with views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the task schema consumed by the task list page.

pub mod types;
