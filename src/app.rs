//! Root application component with routing, context providers, and the
//! one-shot session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::pages::{
    analytics::AnalyticsPage, clubs::ClubsPage, dashboard::DashboardPage, events::EventsPage,
    login::LoginPage, not_found::NotFoundPage, register::RegisterPage, resources::ResourcesPage,
    settings::SettingsPage,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::storage::LocalStorage;

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
/// Restores the session from persisted credentials, provides the shared
/// state contexts, kicks off the one-shot identity verification, and sets up
/// client-side routing with the protected subtree behind [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Optimistic restore: a persisted token counts as authenticated until
    // the bootstrap verification settles.
    let session = RwSignal::new(SessionState::restore(&LocalStorage));
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    // One-shot reconciliation against the identity service. Runs exactly
    // once per page load; the epoch check inside the session discards the
    // result if a logout lands first.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome =
            crate::state::bootstrap::run(session, &LocalStorage, &crate::net::api::ApiVerifier)
                .await;
        log::info!("session bootstrap settled: {outcome:?}");
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-hub.css"/>
        <Title text="Campus Hub"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("clubs") view=ClubsPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
