//! 検索パネルコンポーネント
//!
//! 入力ごとにQueryChanged、Enterと検索ボタンで即時検索。

use crate::dom::DomView;
use leptos::prelude::*;
use roma_tours_common::{Category, InputEvent};

#[component]
pub fn SearchPanel<F>(dom_view: DomView, on_event: F) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send + Sync,
{
    let active = RwSignal::new("all".to_string());

    let categories = std::iter::once(("all", "All"))
        .chain(Category::ALL.iter().map(|c| (c.as_str(), c.label())))
        .map(|(value, label)| {
            let on_event = on_event.clone();
            view! {
                <button
                    class="category-btn"
                    class:active=move || active.get() == value
                    data-category=value
                    on:click=move |_| {
                        active.set(value.to_string());
                        on_event(InputEvent::CategorySelected(value.to_string()));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="search-panel">
            <div class="search-row">
                <input
                    type="text"
                    id="search-input"
                    placeholder="Search attractions..."
                    on:input={
                        let on_event = on_event.clone();
                        move |ev| on_event(InputEvent::QueryChanged(event_target_value(&ev)))
                    }
                    on:keydown={
                        let on_event = on_event.clone();
                        move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_event(InputEvent::SearchTriggered);
                            }
                        }
                    }
                />
                <button
                    id="search-button"
                    class="btn btn-primary"
                    on:click={
                        let on_event = on_event.clone();
                        move |_| on_event(InputEvent::SearchTriggered)
                    }
                >
                    "Search"
                </button>
            </div>

            <div class="category-filters">{categories}</div>

            <p id="results-count" class="text-muted">{move || dom_view.count_message()}</p>
        </div>
    }
}
