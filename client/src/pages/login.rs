//! Login page: accepts an access token and stores it in the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route never requires auth. A successful submit writes the token via
//! `AuthSession::login` and navigates to the task list, where the guard
//! re-reads the store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::RouteName;
use crate::state::auth::AuthSession;

/// Trim the entered token and require a value.
pub fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() { Err("Enter an access token.") } else { Ok(token.to_owned()) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let navigate = use_navigate();
    let token = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Resolved after hydration so server and client markup agree.
    let signed_in = RwSignal::new(false);
    let session_probe = session.clone();
    Effect::new(move || signed_in.set(session_probe.is_authenticated()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = match validate_token_input(&token.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        match session.login(&value) {
            Ok(()) => {
                token.set(String::new());
                info.set(String::new());
                navigate(RouteName::TaskList.path(), NavigateOptions::default());
            }
            Err(e) => info.set(format!("Sign-in failed: {e}")),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Tasks"</h1>
                <p class="login-card__subtitle">"Sign in with your access token"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="off"
                        placeholder="Access token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || signed_in.get()>
                    <a class="login-link" href=RouteName::TaskList.path()>
                        "Continue to your tasks"
                    </a>
                </Show>
            </div>
        </div>
    }
}
