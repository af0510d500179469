//! Registration page. A successful registration returns the same token
//! payload as login, so the new user is signed in on the spot.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::input::TextInput;
use crate::components::notifications::{NotificationStack, notify};
use crate::net::types::{ApiError, FieldErrors, RegisterRequest};
use crate::state::session::SessionState;
use crate::state::ui::{NotificationKind, UiState};
use crate::storage::LocalStorage;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    Effect::new(move || {
        if session.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        errors.set(FieldErrors::new());

        // The confirm check never needs a round-trip.
        if password.get_untracked() != password_confirm.get_untracked() {
            errors.update(|map| {
                map.insert(
                    "password_confirm".to_owned(),
                    vec!["Passwords do not match.".to_owned()],
                );
            });
            return;
        }
        submitting.set(true);

        leptos::task::spawn_local(async move {
            let payload = RegisterRequest {
                first_name: first_name.get_untracked().trim().to_owned(),
                last_name: last_name.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                department: department.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
                password_confirm: password_confirm.get_untracked(),
            };
            let result = crate::net::api::register(&payload).await;
            submitting.set(false);
            match result {
                Ok(auth) => {
                    let mut claimed = false;
                    session.update(|state| claimed = state.sign_in(&LocalStorage, auth));
                    if claimed {
                        notify(ui, NotificationKind::Success, "Welcome to Campus Hub!");
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
                <h1 class="auth-page__title">"Create your account"</h1>

                <form class="auth-page__form" on:submit=on_submit>
                    <div class="auth-page__row">
                        <TextInput label="First name" name="first_name" value=first_name errors=errors/>
                        <TextInput label="Last name" name="last_name" value=last_name errors=errors/>
                    </div>
                    <TextInput
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="your@email.com"
                        value=email
                        errors=errors
                    />
                    <TextInput label="Department" name="department" value=department errors=errors/>
                    <TextInput
                        label="Password"
                        name="password"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <TextInput
                        label="Confirm password"
                        name="password_confirm"
                        input_type="password"
                        value=password_confirm
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-page__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
            <NotificationStack/>
        </div>
    }
}
