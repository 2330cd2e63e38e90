//! Route wrapper that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every entry of `routes::ROUTES` renders its page through `GuardedRoute`.
//! A route flagged `requires_auth` starts undecided: the server and the first
//! client render show nothing, so hydration markup matches. After hydration
//! the guard reads the browser token store; `Proceed` reveals the page,
//! `Redirect` replaces the history entry with the login route and the page is
//! never mounted. Routes without the flag are decided up front.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{NavigationDecision, NavigationGuard};
use crate::routes::RouteDescriptor;
use crate::state::auth::AuthSession;

/// Decision known before the token store is readable, if any.
pub fn initial_decision(route: &RouteDescriptor) -> Option<NavigationDecision> {
    (!route.requires_auth).then_some(NavigationDecision::Proceed)
}

/// Whether the wrapped page may be rendered.
pub fn is_visible(decision: Option<NavigationDecision>) -> bool {
    decision == Some(NavigationDecision::Proceed)
}

#[component]
pub fn GuardedRoute(route: &'static RouteDescriptor, children: ChildrenFn) -> impl IntoView {
    let guard = NavigationGuard::new(expect_context::<AuthSession>());
    let navigate = use_navigate();
    let decision = RwSignal::new(initial_decision(route));

    Effect::new(move || {
        let next = guard.check(route);
        decision.set(Some(next));
        if let Some(target) = next.redirect_path() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <Show when=move || is_visible(decision.get())>{children()}</Show> }
}
