//! 名所カード一覧コンポーネント

use crate::dom::DomView;
use leptos::prelude::*;
use roma_tours_common::{InputEvent, LocationSummary};

#[component]
pub fn LocationCards<F>(summaries: Vec<LocationSummary>, dom_view: DomView, on_event: F) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send + Sync,
{
    let cards = summaries
        .into_iter()
        .map(|summary| {
            let key = summary.key.clone();
            let visible_key = key.clone();
            let open_key = key.clone();
            let on_event = on_event.clone();
            let badges = summary
                .categories
                .iter()
                .map(|c| view! { <span class="category-badge">{c.label()}</span> })
                .collect_view();

            view! {
                <div
                    class="location-card"
                    data-location=key
                    class:hidden=move || !dom_view.is_visible(&visible_key)
                >
                    <h3>{summary.title}</h3>
                    <p class="location-address">{summary.address}</p>
                    <p>{summary.description}</p>
                    <div class="category-badges">{badges}</div>
                    <button
                        class="btn btn-secondary more-button"
                        on:click=move |_| on_event(InputEvent::OpenDetail(open_key.clone()))
                    >
                        "More"
                    </button>
                </div>
            }
        })
        .collect_view();

    view! { <div class="location-grid">{cards}</div> }
}
