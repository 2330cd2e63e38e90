use super::*;
use crate::routes::{LOGIN, ROUTES, TASK_LIST};
use crate::state::auth::{MemoryTokenStore, TOKEN_KEY, TokenStore};
use std::sync::Arc;

fn guard_with(token: Option<&str>) -> NavigationGuard {
    let store = match token {
        Some(t) => MemoryTokenStore::with_entry(TOKEN_KEY, t),
        None => MemoryTokenStore::new(),
    };
    NavigationGuard::new(AuthSession::new(store))
}

// =============================================================
// decide
// =============================================================

#[test]
fn open_routes_always_proceed() {
    for route in ROUTES.iter().filter(|r| !r.requires_auth) {
        assert_eq!(decide(route, AuthState::Unauthenticated), NavigationDecision::Proceed);
        assert_eq!(decide(route, AuthState::Authenticated), NavigationDecision::Proceed);
    }
}

#[test]
fn protected_routes_require_authentication() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(decide(route, AuthState::Authenticated), NavigationDecision::Proceed);
        assert_eq!(decide(route, AuthState::Unauthenticated), NavigationDecision::Redirect(RouteName::Login));
    }
}

#[test]
fn decide_uses_only_the_flag_not_the_path() {
    let custom = RouteDescriptor { path: "/anything", name: RouteName::TaskList, requires_auth: false };
    assert_eq!(decide(&custom, AuthState::Unauthenticated), NavigationDecision::Proceed);
}

#[test]
fn redirect_path_points_at_login() {
    assert_eq!(NavigationDecision::Redirect(RouteName::Login).redirect_path(), Some("/"));
    assert_eq!(NavigationDecision::Proceed.redirect_path(), None);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn empty_store_redirects_tasks_to_login() {
    let decision = guard_with(None).check_path("/tasks");
    assert_eq!(decision, NavigationDecision::Redirect(RouteName::Login));
    assert_eq!(decision.redirect_path(), Some("/"));
}

#[test]
fn stored_token_reaches_tasks() {
    assert_eq!(guard_with(Some("abc123")).check_path("/tasks"), NavigationDecision::Proceed);
}

#[test]
fn empty_token_value_redirects_tasks() {
    assert_eq!(guard_with(Some("")).check(&TASK_LIST), NavigationDecision::Redirect(RouteName::Login));
}

#[test]
fn login_route_proceeds_in_any_store_state() {
    for token in [None, Some(""), Some("abc123")] {
        assert_eq!(guard_with(token).check_path("/"), NavigationDecision::Proceed);
        assert_eq!(guard_with(token).check(&LOGIN), NavigationDecision::Proceed);
    }
}

#[test]
fn unknown_paths_proceed() {
    assert_eq!(guard_with(None).check_path("/nowhere"), NavigationDecision::Proceed);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn repeated_checks_are_idempotent() {
    for token in [None, Some("abc123")] {
        let guard = guard_with(token);
        let first = guard.check(&TASK_LIST);
        for _ in 0..5 {
            assert_eq!(guard.check(&TASK_LIST), first);
        }
    }
}

#[test]
fn guard_does_not_mutate_store() {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_entry(TOKEN_KEY, "abc123"));
    let guard = NavigationGuard::new(AuthSession::from_shared(store.clone()));
    guard.check_path("/tasks");
    guard.check_path("/");
    assert_eq!(store.get(TOKEN_KEY), Ok(Some("abc123".to_owned())));
}

#[test]
fn guard_reads_token_fresh_on_each_check() {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let session = AuthSession::from_shared(store.clone());
    let guard = NavigationGuard::new(session.clone());

    assert_eq!(guard.check(&TASK_LIST), NavigationDecision::Redirect(RouteName::Login));
    session.login("abc123").unwrap();
    assert_eq!(guard.check(&TASK_LIST), NavigationDecision::Proceed);
    session.logout().unwrap();
    assert_eq!(guard.check(&TASK_LIST), NavigationDecision::Redirect(RouteName::Login));
}
