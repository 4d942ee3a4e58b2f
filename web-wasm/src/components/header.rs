//! ヘッダーコンポーネント
//!
//! ナビゲーション・テーマ切り替え・モバイルメニュー

use crate::dom::scroll_to;
use leptos::prelude::*;
use roma_tours_common::{NavTarget, Theme};

const NAV_LABELS: [&str; 3] = ["Home", "Tours", "Contact"];

#[component]
pub fn Header<FT>(theme: RwSignal<Theme>, on_toggle_theme: FT) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone,
{
    let menu_open = RwSignal::new(false);

    let nav_items = move |class: &'static str| {
        NAV_LABELS
            .iter()
            .map(|label| {
                let label = *label;
                view! {
                    <button
                        class=class
                        on:click=move |_| {
                            if let Some(target) = NavTarget::from_label(label) {
                                scroll_to(target);
                            }
                            menu_open.set(false);
                        }
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="header">
            <div class="header-inner">
                <h1 class="logo">"Roma Tours"</h1>

                <nav class="nav-desktop">{nav_items("nav-link")}</nav>

                <div class="header-actions">
                    <button
                        id="theme-toggle"
                        class="btn btn-icon"
                        aria-label="Toggle dark mode"
                        on:click=move |_| on_toggle_theme(())
                    >
                        {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button
                        id="mobile-menu-button"
                        class="btn btn-icon nav-mobile-toggle"
                        aria-label="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <nav id="mobile-menu" class="nav-mobile" class:hidden=move || !menu_open.get()>
                {nav_items("nav-link-mobile")}
            </nav>
        </header>
    }
}
