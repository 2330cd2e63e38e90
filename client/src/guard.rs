//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before a route is shown. `decide` is the whole policy: a route flagged
//! `requires_auth` is only reachable while authenticated, everything else
//! always proceeds. `NavigationGuard` binds the policy to an injected
//! `AuthSession` and re-reads the token on every check.
//!
//! The guard never writes to the token store and has no error outcome.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, RouteDescriptor, RouteName};
use crate::state::auth::{AuthSession, AuthState};

/// Outcome of a navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(RouteName),
}

impl NavigationDecision {
    /// Path to navigate to instead, if the transition was redirected.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Proceed => None,
            Self::Redirect(name) => Some(name.path()),
        }
    }
}

/// Pure access decision for `route` under `auth`.
pub fn decide(route: &RouteDescriptor, auth: AuthState) -> NavigationDecision {
    if route.requires_auth && !auth.is_authenticated() {
        NavigationDecision::Redirect(RouteName::Login)
    } else {
        NavigationDecision::Proceed
    }
}

#[derive(Clone, Debug)]
pub struct NavigationGuard {
    session: AuthSession,
}

impl NavigationGuard {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    /// Check a transition to `route` against the current token.
    pub fn check(&self, route: &RouteDescriptor) -> NavigationDecision {
        let decision = decide(route, self.session.state());
        match decision {
            NavigationDecision::Proceed => log::debug!("navigation to {} proceeds", route.name),
            NavigationDecision::Redirect(target) => {
                log::info!("navigation to {} redirected to {target}", route.name);
            }
        }
        decision
    }

    /// Check a transition to `path`. Paths outside the routing table proceed
    /// and are left to the router's fallback.
    pub fn check_path(&self, path: &str) -> NavigationDecision {
        match routes::by_path(path) {
            Some(route) => self.check(route),
            None => {
                log::debug!("navigation to unrouted path {path} proceeds");
                NavigationDecision::Proceed
            }
        }
    }
}
