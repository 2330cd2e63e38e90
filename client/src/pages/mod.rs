//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per entry in `routes::ROUTES`. Each page owns route-scoped
//! orchestration and delegates rendering details to `components`.

pub mod login;
pub mod task_list;
