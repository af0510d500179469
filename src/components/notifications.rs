//! Toast notification stack.

use leptos::prelude::*;

use crate::state::ui::{NotificationKind, UiState};

/// Queue a toast and, in the browser, schedule its auto-dismissal.
pub fn notify(ui: RwSignal<UiState>, kind: NotificationKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = String::new();
    ui.update(|state| id = state.push_notification(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(4_000).await;
        ui.update(|state| state.dismiss_notification(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders the queued toasts in a fixed stack with manual dismissal.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack">
            {move || {
                ui.get()
                    .notifications
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        let class = match toast.kind {
                            NotificationKind::Success => "toast toast--success",
                            NotificationKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| {
                                        ui.update(|state| state.dismiss_notification(&id));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
