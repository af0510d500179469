//! Settings page with a change-password form.

use leptos::prelude::*;

use crate::components::input::TextInput;
use crate::components::notifications::notify;
use crate::net::types::{ApiError, FieldErrors};
use crate::state::session::SessionState;
use crate::state::ui::{NotificationKind, UiState};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        errors.set(FieldErrors::new());

        if new_password.get_untracked() != confirm_password.get_untracked() {
            errors.update(|map| {
                map.insert(
                    "confirm_password".to_owned(),
                    vec!["Passwords do not match.".to_owned()],
                );
            });
            return;
        }
        submitting.set(true);

        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token else {
                submitting.set(false);
                return;
            };
            let result = crate::net::api::change_password(
                &token,
                &current_password.get_untracked(),
                &new_password.get_untracked(),
            )
            .await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    notify(ui, NotificationKind::Success, "Password updated");
                }
                Err(ApiError::Validation(fields)) => errors.set(fields),
                Err(err) => notify(ui, NotificationKind::Error, err.message().to_owned()),
            }
        });
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>

            <section class="settings-page__section">
                <h2>"Change password"</h2>
                <form class="settings-page__form" on:submit=on_submit>
                    <TextInput
                        label="Current password"
                        name="current_password"
                        input_type="password"
                        value=current_password
                        errors=errors
                    />
                    <TextInput
                        label="New password"
                        name="new_password"
                        input_type="password"
                        value=new_password
                        errors=errors
                    />
                    <TextInput
                        label="Confirm new password"
                        name="confirm_password"
                        input_type="password"
                        value=confirm_password
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Update password" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
