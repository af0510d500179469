//! Admin-only analytics view.
//!
//! The sidebar hides this entry from non-admins, but hiding a link is not
//! enforcement: anyone authenticated can navigate here directly, and the
//! analytics service rejects non-admin requests on its own.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionState;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let is_admin =
        move || session.get().user.is_some_and(|user| user.role == Role::Admin);

    view! {
        <div class="analytics-page">
            <h1>"Analytics"</h1>
            <Show
                when=is_admin
                fallback=|| view! {
                    <p>"Analytics are available to administrators only."</p>
                }
            >
                <p>"Campus usage reports are served by the analytics service."</p>
            </Show>
        </div>
    }
}
