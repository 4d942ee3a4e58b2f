//! DOMへの反映
//!
//! フィルタ・モーダルの出力はシグナル経由で描画し、
//! スクロールロックとテーマだけは直接body/htmlを触る。

use leptos::prelude::*;
use roma_tours_common::{NavTarget, RenderPayload, Theme, View};
use std::collections::HashMap;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// 現在時刻（ミリ秒）
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// シグナルで描画するビュー
#[derive(Clone, Copy)]
pub struct DomView {
    visibility: RwSignal<HashMap<String, bool>>,
    count_message: RwSignal<String>,
    detail: RwSignal<Option<RenderPayload>>,
    modal_open: RwSignal<bool>,
}

impl DomView {
    pub fn new() -> Self {
        Self {
            visibility: RwSignal::new(HashMap::new()),
            count_message: RwSignal::new(String::new()),
            detail: RwSignal::new(None),
            modal_open: RwSignal::new(false),
        }
    }

    /// 未計算のカードは表示扱い
    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.with(|m| m.get(key).copied().unwrap_or(true))
    }

    pub fn count_message(&self) -> String {
        self.count_message.get()
    }

    pub fn detail(&self) -> Option<RenderPayload> {
        self.detail.get()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open.get()
    }
}

impl View for DomView {
    fn apply_visibility(&mut self, key: &str, visible: bool) {
        let changed = self
            .visibility
            .with_untracked(|m| m.get(key).copied() != Some(visible));
        if changed {
            self.visibility.update(|m| {
                m.insert(key.to_string(), visible);
            });
        }
    }

    fn set_count_message(&mut self, message: &str) {
        self.count_message.set(message.to_string());
    }

    fn render_detail(&mut self, payload: &RenderPayload) {
        self.detail.set(Some(payload.clone()));
    }

    fn set_modal_open(&mut self, open: bool) {
        self.modal_open.set(open);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        set_body_overflow(if locked { "hidden" } else { "auto" });
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.style().set_property("overflow", value) {
            gloo::console::warn!("overflow設定失敗", e);
        }
    }
}

/// OSのダークモード設定
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// html要素のdark/lightクラスを切り替え
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = classes.toggle_with_force("dark", theme.is_dark());
        let _ = classes.toggle_with_force("light", !theme.is_dark());
    }
}

/// ナビゲーション先へスムーズスクロール
pub fn scroll_to(target: NavTarget) {
    let Some(window) = web_sys::window() else { return };

    match target {
        NavTarget::Top => {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
        NavTarget::Section(id) => {
            let element = window.document().and_then(|d| d.get_element_by_id(id));
            if let Some(element) = element {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
    }
}
