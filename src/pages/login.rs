//! Login page with email/password form and inline validation errors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::input::TextInput;
use crate::components::notifications::{NotificationStack, notify};
use crate::net::types::{ApiError, FieldErrors};
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::{NotificationKind, UiState};
use crate::storage::LocalStorage;

/// Login page — the redirect target for every gated navigation attempt.
///
/// Field-scoped validation errors render inline; credential and transport
/// failures surface as toasts and never mutate the session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    // Signed in (or a login just completed): this page is not for us.
    Effect::new(move || {
        if session.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let expired = move || session.get().phase() == SessionPhase::Expired;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        errors.set(FieldErrors::new());

        leptos::task::spawn_local(async move {
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            let result = crate::net::api::login(email_value.trim(), &password_value).await;
            submitting.set(false);
            match result {
                Ok(auth) => {
                    let mut claimed = false;
                    session.update(|state| claimed = state.sign_in(&LocalStorage, auth));
                    if claimed {
                        notify(ui, NotificationKind::Success, "Login successful!");
                    } else {
                        notify(ui, NotificationKind::Error, "Could not persist the session");
                    }
                }
                Err(ApiError::Validation(fields)) => errors.set(fields),
                Err(err) => notify(ui, NotificationKind::Error, err.message().to_owned()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1 class="auth-page__title">"Campus Hub"</h1>
                <p class="auth-page__subtitle">"Unified Campus Resource Management"</p>

                <Show when=expired>
                    <p class="auth-page__expired">
                        "Your session has expired. Please sign in again."
                    </p>
                </Show>

                <form class="auth-page__form" on:submit=on_submit>
                    <TextInput
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="your@email.com"
                        value=email
                        errors=errors
                    />
                    <TextInput
                        label="Password"
                        name="password"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-page__footer">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
            <NotificationStack/>
        </div>
    }
}
