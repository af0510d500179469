//! Clubs page — fetches and lists campus clubs.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn ClubsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let clubs = LocalResource::new(move || {
        let token = session.get().token.unwrap_or_default();
        async move { crate::net::api::fetch_clubs(&token).await }
    });

    view! {
        <div class="list-page">
            <h1>"Clubs"</h1>
            <Suspense fallback=move || view! { <p>"Loading clubs..."</p> }>
                {move || {
                    clubs.get().map(|result| match result {
                        Some(items) if !items.is_empty() => view! {
                            <ul class="list-page__items">
                                {items
                                    .into_iter()
                                    .map(|club| view! {
                                        <li class="list-page__item">
                                            <span class="list-page__name">{club.name}</span>
                                            <span class="list-page__detail">{club.description}</span>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Some(_) => view! { <p>"No clubs yet."</p> }.into_any(),
                        None => view! { <p>"Could not load clubs."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
