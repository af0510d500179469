//! Dashboard landing page for authenticated users.

use leptos::prelude::*;

use crate::state::session::{SessionPhase, SessionState};

/// Dashboard page — greets the verified user, or shows a loading affordance
/// while the startup identity check is still in flight.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let heading = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome back, {}", user.display_name))
    };
    let verifying = move || session.get().phase() == SessionPhase::PendingVerification;

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__heading">{heading}</h1>
            <Show when=verifying>
                <p class="dashboard-page__pending">"Loading your profile..."</p>
            </Show>
            <p class="dashboard-page__blurb">
                "Clubs, events, and bookable resources are one click away in the sidebar."
            </p>
        </div>
    }
}
