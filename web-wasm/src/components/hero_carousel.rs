//! ヒーローカルーセルコンポーネント

use crate::dom::now_ms;
use gloo::timers::callback::Interval;
use leptos::ev;
use leptos::prelude::*;
use roma_tours_common::{Carousel, LocationDetail};

/// 自動送り判定の間隔
const TICK_MS: u32 = 1000;

#[component]
pub fn HeroCarousel(slides: Vec<LocationDetail>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(slides.len(), now_ms()));

    // ページと同じ寿命
    Interval::new(TICK_MS, move || {
        carousel.maybe_update(|c| c.tick(now_ms()));
    })
    .forget();

    let _ = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        carousel.maybe_update(|c| c.handle_key(&key));
    });

    let total = slides.len();
    let slide_views = slides
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            let image = slide.images.first().cloned().unwrap_or_default();
            let alt = slide.title.clone();
            view! {
                <div
                    class="carousel-slide"
                    class:active=move || carousel.with(|c| c.current() == index)
                >
                    <img src=image alt=alt />
                    <div class="carousel-caption">
                        <h2>{slide.title}</h2>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..total)
        .map(|index| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.current() == index) {
                            "carousel-dot bg-opacity-100"
                        } else {
                            "carousel-dot"
                        }
                    }
                    aria-label=format!("Slide {}", index + 1)
                    on:click=move |_| carousel.update(|c| c.select(index, now_ms()))
                ></button>
            }
        })
        .collect_view();

    view! {
        <section
            id="hero"
            class="carousel"
            on:mouseenter=move |_| carousel.update(|c| c.pause())
            on:mouseleave=move |_| carousel.update(|c| c.resume(now_ms()))
        >
            {slide_views}
            <button class="carousel-prev" aria-label="Previous" on:click=move |_| carousel.update(|c| c.prev())>
                "‹"
            </button>
            <button class="carousel-next" aria-label="Next" on:click=move |_| carousel.update(|c| c.next())>
                "›"
            </button>
            <div class="carousel-dots">{dots}</div>
        </section>
    }
}
