//! 詳細モーダルコンポーネント

use crate::dom::DomView;
use leptos::prelude::*;
use roma_tours_common::{InputEvent, RenderPayload};

fn modal_body(payload: RenderPayload) -> impl IntoView {
    let title = payload.title;
    let images = payload
        .images
        .into_iter()
        .map(|src| {
            let alt = title.clone();
            view! { <img class="modal-image" src=src alt=alt /> }
        })
        .collect_view();

    let comments = payload
        .comments
        .into_iter()
        .map(|comment| {
            view! {
                <li class="comment">
                    <div class="comment-meta">
                        <span class="comment-author">{comment.author}</span>
                        <span class="comment-date">{comment.date}</span>
                    </div>
                    <p>{comment.text}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <h2 id="modal-title">{title}</h2>
        <div class="modal-gallery">{images}</div>
        <p id="modal-description">{payload.description}</p>
        <h3>"Visitor Comments"</h3>
        <ul id="modal-comments">{comments}</ul>
    }
}

#[component]
pub fn LocationModal<F>(dom_view: DomView, on_event: F) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send + Sync,
{
    let on_backdrop = on_event.clone();
    let on_close = on_event;

    view! {
        <div
            id="location-modal"
            class="modal"
            class:hidden=move || !dom_view.is_modal_open()
            on:click=move |_| on_backdrop(InputEvent::BackdropClicked)
        >
            // 中身のクリックは背景に伝えない
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| on_close(InputEvent::CloseDetail)
                >
                    "×"
                </button>
                {move || dom_view.detail().map(modal_body)}
            </div>
        </div>
    }
}
