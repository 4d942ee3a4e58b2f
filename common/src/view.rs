//! ビュー境界
//!
//! フィルタエンジンと詳細プレゼンタはこのトレイト越しにしか画面を触らない。
//! ブラウザ側はLeptosのシグナル、CLI側は端末出力で実装する。

use crate::detail::RenderPayload;

pub trait View {
    /// カード1件の表示/非表示
    fn apply_visibility(&mut self, key: &str, visible: bool);

    /// 件数メッセージ
    fn set_count_message(&mut self, message: &str);

    /// モーダルの中身を描画
    fn render_detail(&mut self, payload: &RenderPayload);

    fn set_modal_open(&mut self, open: bool);

    /// 背景スクロール抑止フラグ
    fn set_scroll_lock(&mut self, locked: bool);
}

/// 記録されたビュー呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Visibility { key: String, visible: bool },
    CountMessage(String),
    RenderDetail(String),
    ModalOpen(bool),
    ScrollLock(bool),
}

/// 呼び出しを記録するだけのビュー（ヘッドレス実行・テスト用）
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録を取り出してクリア
    pub fn take(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }

    /// 最後に設定された件数メッセージ
    pub fn last_count_message(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::CountMessage(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// 最後に表示指示されたキー一覧（カタログ順）
    pub fn visible_keys(&self) -> Vec<&str> {
        let mut latest: Vec<(&str, bool)> = Vec::new();
        for call in &self.calls {
            if let ViewCall::Visibility { key, visible } = call {
                match latest.iter_mut().find(|(k, _)| *k == key.as_str()) {
                    Some(entry) => entry.1 = *visible,
                    None => latest.push((key.as_str(), *visible)),
                }
            }
        }
        latest.into_iter().filter(|(_, v)| *v).map(|(k, _)| k).collect()
    }

    pub fn count(&self, pred: impl Fn(&ViewCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl View for RecordingView {
    fn apply_visibility(&mut self, key: &str, visible: bool) {
        self.calls.push(ViewCall::Visibility {
            key: key.to_string(),
            visible,
        });
    }

    fn set_count_message(&mut self, message: &str) {
        self.calls.push(ViewCall::CountMessage(message.to_string()));
    }

    fn render_detail(&mut self, payload: &RenderPayload) {
        self.calls.push(ViewCall::RenderDetail(payload.key.clone()));
    }

    fn set_modal_open(&mut self, open: bool) {
        self.calls.push(ViewCall::ModalOpen(open));
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.calls.push(ViewCall::ScrollLock(locked));
    }
}
