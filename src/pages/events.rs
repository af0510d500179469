//! Events page — lists upcoming campus events.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn EventsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let events = LocalResource::new(move || {
        let token = session.get().token.unwrap_or_default();
        async move { crate::net::api::fetch_events(&token).await }
    });

    view! {
        <div class="list-page">
            <h1>"Events"</h1>
            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events.get().map(|result| match result {
                        Some(items) if !items.is_empty() => view! {
                            <ul class="list-page__items">
                                {items
                                    .into_iter()
                                    .map(|event| view! {
                                        <li class="list-page__item">
                                            <span class="list-page__name">{event.title}</span>
                                            <span class="list-page__detail">{event.starts_at}</span>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Some(_) => view! { <p>"Nothing scheduled."</p> }.into_any(),
                        None => view! { <p>"Could not load events."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
