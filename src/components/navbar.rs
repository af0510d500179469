//! Top navigation bar: sidebar toggle, user identity, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::gate::LOGIN_PATH;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::storage::LocalStorage;

/// Navigation bar across the top of every protected view.
///
/// The identity block tolerates the window where the session is
/// authenticated but the user has not been verified yet: it shows a
/// placeholder instead of failing.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let token = session.get_untracked().token;
        // Local state and persisted slots are cleared first; the server
        // call is best-effort afterwards.
        session.update(|state| state.logout(&LocalStorage));

        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::api::logout_remote(&token).await;
            });
        }

        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let identity = move || {
        session.get().user.map_or_else(
            || {
                view! {
                    <div class="navbar__identity navbar__identity--pending">
                        <span class="navbar__name">"Loading..."</span>
                    </div>
                }
                .into_any()
            },
            |user| {
                let role = format!("{:?}", user.role).to_lowercase();
                view! {
                    <div class="navbar__identity">
                        {user.avatar_url.map(|url| view! {
                            <img class="navbar__avatar" src=url alt="avatar"/>
                        })}
                        <span class="navbar__name">{user.display_name}</span>
                        <span class="navbar__role">{role}</span>
                    </div>
                }
                .into_any()
            },
        )
    };

    view! {
        <header class="navbar">
            <button class="navbar__menu" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                "☰"
            </button>
            <span class="navbar__spacer"></span>
            {identity}
            <button class="navbar__logout" on:click=on_logout>
                "Sign Out"
            </button>
        </header>
    }
}
