//! 対話セッションテスト
//!
//! 標準入力の代わりにバイト列を流してイベント処理を検証

use roma_tours::session;
use roma_tours_common::{Catalog, LandingPage, RecordingView, ViewCall};

fn page() -> LandingPage {
    LandingPage::new(Catalog::builtin().expect("カタログ読み込み失敗"), 300)
}

/// 入力終了時に保留中の検索が1回だけ実行される
#[tokio::test]
async fn test_pending_query_runs_at_eof() {
    let mut page = page();
    let mut view = RecordingView::new();
    let input: &[u8] = b"f\nfo\nfountain\n";

    session::run(&mut page, input, &mut view).await.unwrap();

    // 初期表示 + デバウンス後の1回
    assert_eq!(view.count(|c| matches!(c, ViewCall::CountMessage(_))), 2);
    assert_eq!(view.last_count_message(), Some("Showing 2 attractions"));
    assert_eq!(view.visible_keys(), vec!["trevi", "navona"]);
}

/// 空行で即時検索、保留分は取り消される
#[tokio::test]
async fn test_enter_runs_immediately() {
    let mut page = page();
    let mut view = RecordingView::new();
    let input: &[u8] = b"colosseum\n\n";

    session::run(&mut page, input, &mut view).await.unwrap();

    assert_eq!(view.count(|c| matches!(c, ViewCall::CountMessage(_))), 2);
    assert_eq!(view.visible_keys(), vec!["colosseum"]);
    assert!(page.pending_deadline().is_none());
}

/// カテゴリ・詳細・存在しないキー
#[tokio::test]
async fn test_category_and_modal_commands() {
    let mut page = page();
    let mut view = RecordingView::new();
    let input: &[u8] = b":cat religious\n:open atlantis\n:open pantheon\n:esc\n:esc\n";

    session::run(&mut page, input, &mut view).await.unwrap();

    assert_eq!(page.filter_state().category.as_str(), "religious");
    assert_eq!(view.visible_keys(), vec!["vatican", "pantheon", "castel", "st-peters"]);
    assert_eq!(view.count(|c| *c == ViewCall::RenderDetail("pantheon".into())), 1);
    assert_eq!(view.count(|c| *c == ViewCall::ModalOpen(false)), 1);
    assert!(!page.detail().is_open());
}

/// :quitで残りの入力を読まない
#[tokio::test]
async fn test_quit_stops_reading() {
    let mut page = page();
    let mut view = RecordingView::new();
    let input: &[u8] = b":quit\n:open trevi\n";

    session::run(&mut page, input, &mut view).await.unwrap();

    assert_eq!(view.count(|c| matches!(c, ViewCall::RenderDetail(_))), 0);
}
