//! 詳細モーダル
//!
//! 「More」ボタンで開き、閉じるボタン・背景クリック・Escapeで閉じる。
//! モーダルは常に1つだけ。開いている間は背景スクロールを止める。

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::{Comment, LocationDetail};
use crate::view::View;
use serde::{Deserialize, Serialize};

/// モーダルに描画する内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    pub key: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub comments: Vec<Comment>,
}

impl From<&LocationDetail> for RenderPayload {
    fn from(detail: &LocationDetail) -> Self {
        Self {
            key: detail.key.clone(),
            title: detail.title.clone(),
            description: detail.description.clone(),
            images: detail.images.clone(),
            comments: detail.comments.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub active_key: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DetailPresenter {
    state: ModalState,
    scroll_locked: bool,
}

impl DetailPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// 詳細を開く。キーがなければ状態もビューも変更しない
    pub fn open(&mut self, key: &str, catalog: &Catalog, view: &mut dyn View) -> Result<RenderPayload> {
        let detail = catalog.detail(key).ok_or_else(|| {
            tracing::warn!(key, "detail requested for unknown location");
            Error::LocationNotFound(key.to_string())
        })?;

        let payload = RenderPayload::from(detail);
        // 開いたまま差し替える場合も閉じずに上書きする
        view.render_detail(&payload);
        if !self.state.is_open {
            view.set_modal_open(true);
        }
        self.set_scroll_lock(true, view);

        self.state = ModalState {
            is_open: true,
            active_key: Some(key.to_string()),
        };
        tracing::debug!(key, "detail opened");
        Ok(payload)
    }

    /// 閉じる（閉じていても何もしないだけ）
    pub fn close(&mut self, view: &mut dyn View) {
        if self.state.is_open {
            view.set_modal_open(false);
            tracing::debug!(key = ?self.state.active_key, "detail closed");
        }
        self.set_scroll_lock(false, view);
        self.state = ModalState::default();
    }

    /// Escapeキーは開いているときだけ閉じる
    pub fn on_escape(&mut self, view: &mut dyn View) -> bool {
        if !self.state.is_open {
            return false;
        }
        self.close(view);
        true
    }

    fn set_scroll_lock(&mut self, locked: bool, view: &mut dyn View) {
        if self.scroll_locked != locked {
            self.scroll_locked = locked;
            view.set_scroll_lock(locked);
        }
    }
}
