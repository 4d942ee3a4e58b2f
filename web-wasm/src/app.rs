//! メインアプリケーションコンポーネント

use crate::components::{
    contact_form::ContactSection,
    header::Header,
    hero_carousel::HeroCarousel,
    location_cards::LocationCards,
    location_modal::LocationModal,
    search_panel::SearchPanel,
};
use crate::dom::{self, now_ms, DomView};
use crate::storage;
use gloo::timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use roma_tours_common::{
    Catalog, Error, InputEvent, LandingPage, LocationDetail, Outcome, TimerHandle,
    DEFAULT_DEBOUNCE_MS,
};

/// ヒーローに出す名所
const HERO_KEYS: [&str; 3] = ["colosseum", "vatican", "trevi"];

/// デバウンス満了時にfireを呼ぶ
///
/// 古いハンドルはLandingPage側で無視されるので、
/// 途中のタイマーは取り消さなくてよい。
fn schedule_fire(page: StoredValue<LandingPage>, view: DomView, handle: TimerHandle) {
    let delay = handle.remaining_ms(now_ms()) as u32;
    Timeout::new(delay, move || {
        let mut view = view;
        page.update_value(|p| {
            p.fire(handle, &mut view);
        });
    })
    .forget();
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            gloo::console::error!("カタログ読み込み失敗", e.to_string());
            return view! {
                <div class="container">
                    <p class="text-muted">"Tours are unavailable right now."</p>
                </div>
            }
            .into_any();
        }
    };

    let summaries = catalog.summaries().to_vec();
    let slides: Vec<LocationDetail> = HERO_KEYS
        .iter()
        .filter_map(|key| catalog.detail(key).cloned())
        .collect();

    let dom_view = DomView::new();
    let page = StoredValue::new(LandingPage::new(catalog, DEFAULT_DEBOUNCE_MS));

    // 初期表示（全件）
    page.update_value(|p| {
        let mut view = dom_view;
        p.start(&mut view);
    });

    // 入力イベントの振り分け
    let dispatch = move |event: InputEvent| {
        let mut view = dom_view;
        let now = now_ms();
        let outcome = page.try_update_value(|p| p.handle(event, now, &mut view));

        match outcome {
            Some(Ok(Outcome::Scheduled(handle))) => schedule_fire(page, dom_view, handle),
            Some(Ok(_)) | None => {}
            Some(Err(Error::LocationNotFound(key))) => {
                gloo::console::warn!("No location data for", key);
            }
            Some(Err(e)) => {
                gloo::console::error!(e.to_string());
            }
        }
    };

    // テーマ
    let theme = RwSignal::new(storage::load_theme(dom::system_prefers_dark()));
    Effect::new(move |_| dom::apply_theme(theme.get()));

    let on_toggle_theme = move |_: ()| {
        theme.update(|t| *t = t.toggle());
        storage::save_theme(theme.get_untracked());
    };

    // Escapeでモーダルを閉じる
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            dispatch(InputEvent::EscapePressed);
        }
    });

    view! {
        <Header theme=theme on_toggle_theme=on_toggle_theme />

        <main>
            <HeroCarousel slides=slides />

            <section id="tours" class="tours-section">
                <h2>"Explore Rome"</h2>
                <SearchPanel dom_view=dom_view on_event=dispatch />
                <LocationCards summaries=summaries dom_view=dom_view on_event=dispatch />
            </section>

            <ContactSection />
        </main>

        <LocationModal dom_view=dom_view on_event=dispatch />
    }
    .into_any()
}
