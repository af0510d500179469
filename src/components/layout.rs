//! Application shell for protected views: sidebar, navbar, content outlet,
//! and the toast stack.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::notifications::NotificationStack;
use crate::components::sidebar::Sidebar;

/// Chrome shared by every protected page.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
            <NotificationStack/>
        </div>
    }
}
