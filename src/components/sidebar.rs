//! Sidebar navigation with role-gated entries.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::gate::{self, RouteRequest};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

struct NavItem {
    label: &'static str,
    request: RouteRequest,
}

/// Menu entries in display order. Hiding the analytics link from
/// non-admins is presentation only; the server enforces the role.
const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Dashboard", request: RouteRequest::protected("/") },
    NavItem { label: "Clubs", request: RouteRequest::protected("/clubs") },
    NavItem { label: "Events", request: RouteRequest::protected("/events") },
    NavItem { label: "Resources", request: RouteRequest::protected("/resources") },
    NavItem { label: "Analytics", request: RouteRequest::role_gated("/analytics", Role::Admin) },
    NavItem { label: "Settings", request: RouteRequest::protected("/settings") },
];

/// Collapsible sidebar listing the navigation entries the current user may
/// see.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let aside_class = move || {
        if ui.get().sidebar_open {
            "sidebar sidebar--open"
        } else {
            "sidebar sidebar--closed"
        }
    };

    view! {
        <aside class=aside_class>
            <div class="sidebar__header">
                <h2 class="sidebar__title">"Campus Hub"</h2>
                <button
                    class="sidebar__close"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    "×"
                </button>
            </div>

            <nav class="sidebar__nav">
                {move || {
                    let state = session.get();
                    let current = location.pathname.get();
                    NAV_ITEMS
                        .iter()
                        .filter(|item| gate::link_visible(&state, &item.request))
                        .map(|item| {
                            let class = if current == item.request.path {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            };
                            view! {
                                <a href=item.request.path class=class>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </aside>
    }
}
