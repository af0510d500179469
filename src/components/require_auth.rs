//! Gate wrapper around the protected route subtree.
//!
//! Evaluates the route gate on every session change: permitted sessions
//! render the app layout (and its outlet), anything else is redirected to
//! the login entry point. An authenticated session whose verification is
//! still in flight is permitted — chrome that needs the user renders a
//! loading affordance until `set_user` lands.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::state::gate::{self, GateDecision, RouteRequest};
use crate::state::session::SessionState;

/// Parent-route view for everything behind the login wall.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // One request covers the whole protected subtree; per-link role gating
    // is handled by the sidebar.
    let request = RouteRequest::protected("/");
    let permitted =
        move || matches!(gate::decide(&session.get(), &request), GateDecision::Permit);

    // Redirect to login whenever the session stops being authenticated.
    Effect::new(move || {
        if let GateDecision::Redirect(path) = gate::decide(&session.get(), &request) {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=permitted>
            <Layout/>
        </Show>
    }
}
