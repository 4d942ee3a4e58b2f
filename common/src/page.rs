//! ランディングページのコントローラ
//!
//! 入力イベントをフィルタエンジンと詳細プレゼンタに振り分ける。
//! ホスト（ブラウザ・CLI）はこの型とViewだけを扱う。

use crate::catalog::Catalog;
use crate::debounce::TimerHandle;
use crate::detail::{DetailPresenter, RenderPayload};
use crate::error::Result;
use crate::filter::{FilterEngine, FilterState, Visibility};
use crate::view::View;

/// 入力イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    QueryChanged(String),
    CategorySelected(String),
    /// Enterキー・検索ボタン
    SearchTriggered,
    OpenDetail(String),
    CloseDetail,
    BackdropClicked,
    EscapePressed,
}

/// イベント処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// デバウンス後に再計算予定
    Scheduled(TimerHandle),
    Filtered(Visibility),
    Opened(RenderPayload),
    Closed,
    /// 何もしなかった（閉じているときのEscapeなど）
    Ignored,
}

#[derive(Debug, Clone)]
pub struct LandingPage {
    catalog: Catalog,
    filter: FilterEngine,
    detail: DetailPresenter,
}

impl LandingPage {
    pub fn new(catalog: Catalog, debounce_ms: u64) -> Self {
        Self {
            catalog,
            filter: FilterEngine::new(debounce_ms),
            detail: DetailPresenter::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filter.state()
    }

    pub fn detail(&self) -> &DetailPresenter {
        &self.detail
    }

    pub fn pending_deadline(&self) -> Option<u64> {
        self.filter.pending_deadline()
    }

    /// 初期表示（空クエリ・全カテゴリで1回計算）
    pub fn start(&mut self, view: &mut dyn View) -> Visibility {
        self.filter.recompute(&self.catalog, view)
    }

    pub fn handle(&mut self, event: InputEvent, now_ms: u64, view: &mut dyn View) -> Result<Outcome> {
        let outcome = match event {
            InputEvent::QueryChanged(text) => {
                Outcome::Scheduled(self.filter.on_query_input(&text, now_ms))
            }
            InputEvent::CategorySelected(value) => {
                Outcome::Filtered(self.filter.on_category_selected(&value, &self.catalog, view))
            }
            InputEvent::SearchTriggered => {
                Outcome::Filtered(self.filter.on_search_triggered(&self.catalog, view))
            }
            InputEvent::OpenDetail(key) => {
                Outcome::Opened(self.detail.open(&key, &self.catalog, view)?)
            }
            InputEvent::CloseDetail | InputEvent::BackdropClicked => {
                self.detail.close(view);
                Outcome::Closed
            }
            InputEvent::EscapePressed => {
                if self.detail.on_escape(view) {
                    Outcome::Closed
                } else {
                    Outcome::Ignored
                }
            }
        };
        Ok(outcome)
    }

    /// 時計を進める（デバウンス期限の確認）
    pub fn tick(&mut self, now_ms: u64, view: &mut dyn View) -> Option<Visibility> {
        self.filter.tick(now_ms, &self.catalog, view)
    }

    /// ホスト側タイマーからの発火
    pub fn fire(&mut self, handle: TimerHandle, view: &mut dyn View) -> Option<Visibility> {
        self.filter.fire(handle, &self.catalog, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::view::{RecordingView, ViewCall};

    fn page() -> LandingPage {
        LandingPage::new(Catalog::builtin().expect("カタログ読み込み失敗"), 300)
    }

    #[test]
    fn test_start_shows_everything() {
        let mut page = page();
        let mut view = RecordingView::new();
        let v = page.start(&mut view);
        assert_eq!(v.count, 11);
        assert_eq!(view.last_count_message(), Some("Showing 11 attractions"));
    }

    #[test]
    fn test_debounce_then_enter() {
        let mut page = page();
        let mut view = RecordingView::new();

        page.handle(InputEvent::QueryChanged("v".into()), 0, &mut view).unwrap();
        page.handle(InputEvent::QueryChanged("va".into()), 100, &mut view).unwrap();
        page.handle(InputEvent::QueryChanged("vatican".into()), 150, &mut view).unwrap();
        let outcome = page.handle(InputEvent::SearchTriggered, 150, &mut view).unwrap();

        match outcome {
            Outcome::Filtered(v) => {
                assert_eq!(v.visible, vec!["vatican".to_string(), "st-peters".to_string()])
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        let messages = view.count(|c| matches!(c, ViewCall::CountMessage(_)));
        assert!(page.tick(400, &mut view).is_none());
        assert!(page.tick(450, &mut view).is_none());
        assert_eq!(view.count(|c| matches!(c, ViewCall::CountMessage(_))), messages);
    }

    #[test]
    fn test_modal_events() {
        let mut page = page();
        let mut view = RecordingView::new();

        assert_eq!(
            page.handle(InputEvent::EscapePressed, 0, &mut view).unwrap(),
            Outcome::Ignored
        );
        page.handle(InputEvent::OpenDetail("colosseum".into()), 0, &mut view).unwrap();
        page.handle(InputEvent::OpenDetail("vatican".into()), 0, &mut view).unwrap();
        assert_eq!(page.detail().state().active_key.as_deref(), Some("vatican"));

        assert_eq!(
            page.handle(InputEvent::BackdropClicked, 0, &mut view).unwrap(),
            Outcome::Closed
        );
        assert_eq!(
            page.handle(InputEvent::CloseDetail, 0, &mut view).unwrap(),
            Outcome::Closed
        );
        assert!(!page.detail().is_open());
        assert_eq!(view.count(|c| *c == ViewCall::ScrollLock(true)), 1);
        assert_eq!(view.count(|c| *c == ViewCall::ScrollLock(false)), 1);
    }

    #[test]
    fn test_open_unknown_surfaces_error() {
        let mut page = page();
        let mut view = RecordingView::new();
        let result = page.handle(InputEvent::OpenDetail("atlantis".into()), 0, &mut view);
        assert!(matches!(result, Err(Error::LocationNotFound(_))));
        assert!(view.calls.is_empty());
    }

    #[test]
    fn test_unknown_category_hides_all() {
        let mut page = page();
        let mut view = RecordingView::new();
        page.handle(InputEvent::CategorySelected("baroque".into()), 0, &mut view).unwrap();
        assert!(page.filter_state().category.is_unknown());
        assert!(view.visible_keys().is_empty());
        assert_eq!(
            view.last_count_message(),
            Some("No attractions found matching your search.")
        );
    }
}
