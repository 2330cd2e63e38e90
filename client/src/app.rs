//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::GuardedRoute;
use crate::pages::{login::LoginPage, task_list::TaskListPage};
use crate::routes::RouteName;
use crate::state::auth::AuthSession;
use crate::state::tasks::TasksState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth session and task state, then mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AuthSession::for_environment());
    provide_context(RwSignal::new(TasksState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/tasklist.css"/>
        <Title text="Tasks"/>
        <AppRoutes/>
    }
}

/// Client-side routing. The `<Route>` entries mirror `routes::ROUTES`; each
/// page is wrapped in `GuardedRoute` with its descriptor, so access is
/// decided from the table's `requires_auth` flag before the page mounts.
///
/// Expects `AuthSession` and `RwSignal<TasksState>` in context.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <GuardedRoute route=RouteName::Login.descriptor()><LoginPage/></GuardedRoute> }
                />
                <Route
                    path=StaticSegment("tasks")
                    view=|| view! { <GuardedRoute route=RouteName::TaskList.descriptor()><TaskListPage/></GuardedRoute> }
                />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
