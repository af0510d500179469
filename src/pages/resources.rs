//! Resources page — lists bookable campus resources.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let resources = LocalResource::new(move || {
        let token = session.get().token.unwrap_or_default();
        async move { crate::net::api::fetch_resources(&token).await }
    });

    view! {
        <div class="list-page">
            <h1>"Resources"</h1>
            <Suspense fallback=move || view! { <p>"Loading resources..."</p> }>
                {move || {
                    resources.get().map(|result| match result {
                        Some(items) if !items.is_empty() => view! {
                            <ul class="list-page__items">
                                {items
                                    .into_iter()
                                    .map(|resource| view! {
                                        <li class="list-page__item">
                                            <span class="list-page__name">{resource.name}</span>
                                            <span class="list-page__detail">{resource.category}</span>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Some(_) => view! { <p>"No resources registered."</p> }.into_any(),
                        None => view! { <p>"Could not load resources."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
