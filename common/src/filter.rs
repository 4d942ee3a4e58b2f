//! 検索フィルタ
//!
//! テキスト（タイトル・説明・住所の部分一致、大文字小文字無視）と
//! カテゴリの両方に一致したカードだけを表示する。順位付けはせず、
//! 表示順は常にカタログ順。

use crate::catalog::Catalog;
use crate::debounce::{Debouncer, TimerHandle, DEFAULT_DEBOUNCE_MS};
use crate::error::{Error, Result};
use crate::types::{Category, LocationSummary};
use crate::view::View;
use std::fmt;

pub const NO_RESULTS_MESSAGE: &str = "No attractions found matching your search.";

/// カテゴリフィルタの選択値
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// 固定カテゴリ外の値。何にも一致しない
    Unknown(String),
}

impl CategoryFilter {
    /// UIの値をそのまま受け付ける（不明値はUnknown）
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        if normalized == "all" {
            return CategoryFilter::All;
        }
        match normalized.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unknown(value.to_string()),
        }
    }

    /// 不明値をエラーにする
    pub fn parse_strict(value: &str) -> Result<Self> {
        match Self::parse(value) {
            CategoryFilter::Unknown(v) => Err(Error::UnknownCategory(v)),
            filter => Ok(filter),
        }
    }

    pub fn matches(&self, entry: &LocationSummary) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.has_category(*category),
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CategoryFilter::Unknown(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Unknown(v) => v,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フィルタ状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

/// 再計算の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    /// 表示するキー（カタログ順）
    pub visible: Vec<String>,
    /// 非表示のキー（カタログ順）
    pub hidden: Vec<String>,
    pub count: usize,
    pub total: usize,
}

impl Visibility {
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.iter().any(|k| k == key)
    }

    pub fn message(&self) -> String {
        count_message(self.count)
    }
}

/// 件数メッセージ
pub fn count_message(count: usize) -> String {
    match count {
        0 => NO_RESULTS_MESSAGE.to_string(),
        1 => "Showing 1 attraction".to_string(),
        n => format!("Showing {} attractions", n),
    }
}

/// テキスト一致判定。queryは小文字化済みであること
fn text_matches(entry: &LocationSummary, query_lower: &str) -> bool {
    query_lower.is_empty()
        || entry.title.to_lowercase().contains(query_lower)
        || entry.description.to_lowercase().contains(query_lower)
        || entry.address.to_lowercase().contains(query_lower)
}

/// 1件の表示判定
pub fn is_visible(entry: &LocationSummary, query: &str, category: &CategoryFilter) -> bool {
    category.matches(entry) && text_matches(entry, &query.to_lowercase())
}

/// 全件の表示判定
pub fn compute_visibility(
    query: &str,
    category: &CategoryFilter,
    entries: &[LocationSummary],
) -> Visibility {
    let query_lower = query.to_lowercase();
    let (visible, hidden): (Vec<_>, Vec<_>) = entries
        .iter()
        .partition(|e| category.matches(e) && text_matches(e, &query_lower));

    Visibility {
        count: visible.len(),
        total: entries.len(),
        visible: visible.into_iter().map(|e| e.key.clone()).collect(),
        hidden: hidden.into_iter().map(|e| e.key.clone()).collect(),
    }
}

/// フィルタエンジン（状態 + デバウンス）
#[derive(Debug, Clone)]
pub struct FilterEngine {
    state: FilterState,
    debounce: Debouncer<String>,
}

impl FilterEngine {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            state: FilterState::default(),
            debounce: Debouncer::new(debounce_ms),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// 保留中の再計算の期限
    pub fn pending_deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    /// 現在の状態で即時再計算し、ビューへ反映
    pub fn recompute(&self, catalog: &Catalog, view: &mut dyn View) -> Visibility {
        let entries = catalog.summaries();
        let result = compute_visibility(&self.state.query, &self.state.category, entries);

        for entry in entries {
            view.apply_visibility(&entry.key, result.is_visible(&entry.key));
        }
        view.set_count_message(&result.message());

        tracing::debug!(
            query = %self.state.query,
            category = %self.state.category,
            count = result.count,
            total = result.total,
            "filter recomputed"
        );
        result
    }

    /// 文字入力。再計算はデバウンス後
    pub fn on_query_input(&mut self, text: &str, now_ms: u64) -> TimerHandle {
        self.state.query = text.to_string();
        self.debounce.schedule(now_ms, text.to_string())
    }

    /// Enterキー・検索ボタン。保留中の再計算を取り消して即時実行
    pub fn on_search_triggered(&mut self, catalog: &Catalog, view: &mut dyn View) -> Visibility {
        if self.debounce.cancel() {
            tracing::debug!("pending filter run superseded by explicit search");
        }
        self.recompute(catalog, view)
    }

    /// カテゴリ選択。現在の入力値で即時再計算
    pub fn on_category_selected(
        &mut self,
        value: &str,
        catalog: &Catalog,
        view: &mut dyn View,
    ) -> Visibility {
        let category = CategoryFilter::parse(value);
        if category.is_unknown() {
            tracing::warn!(category = value, "unknown category filter, nothing will match");
        }
        self.state.category = category;
        self.recompute(catalog, view)
    }

    /// 時計を進める。期限が来ていれば再計算
    pub fn tick(&mut self, now_ms: u64, catalog: &Catalog, view: &mut dyn View) -> Option<Visibility> {
        let query = self.debounce.poll(now_ms)?;
        self.state.query = query;
        Some(self.recompute(catalog, view))
    }

    /// ホスト側タイマーからの発火
    pub fn fire(&mut self, handle: TimerHandle, catalog: &Catalog, view: &mut dyn View) -> Option<Visibility> {
        let query = self.debounce.fire(handle)?;
        self.state.query = query;
        Some(self.recompute(catalog, view))
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
