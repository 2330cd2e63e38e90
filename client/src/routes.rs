//! Static routing table.
//!
//! DESIGN
//! ======
//! Each route carries a capability flag (`requires_auth`) next to its path and
//! name. The table is fixed at compile time; `app::App` mirrors it with Leptos
//! `<Route>` entries and the navigation guard reads the flags from here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

/// Identifier of a route in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    TaskList,
}

impl RouteName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::TaskList => "TaskList",
        }
    }

    /// The descriptor registered under this name.
    pub fn descriptor(self) -> &'static RouteDescriptor {
        by_name(self)
    }

    /// Path of the route registered under this name.
    pub fn path(self) -> &'static str {
        by_name(self).path
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path-addressable view and its access requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
}

pub const LOGIN: RouteDescriptor = RouteDescriptor { path: "/", name: RouteName::Login, requires_auth: false };

pub const TASK_LIST: RouteDescriptor =
    RouteDescriptor { path: "/tasks", name: RouteName::TaskList, requires_auth: true };

/// Ordered routing table.
pub static ROUTES: [RouteDescriptor; 2] = [LOGIN, TASK_LIST];

/// Look up a route by name. Every `RouteName` has exactly one entry.
pub fn by_name(name: RouteName) -> &'static RouteDescriptor {
    match name {
        RouteName::Login => &ROUTES[0],
        RouteName::TaskList => &ROUTES[1],
    }
}

/// Look up the first route whose path matches `path`.
///
/// Query strings, fragments and a trailing slash are ignored.
pub fn by_path(path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
