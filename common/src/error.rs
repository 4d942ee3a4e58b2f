//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 詳細テーブルに存在しないキー
    #[error("No such location: {0}")]
    LocationNotFound(String),

    /// 固定カテゴリ以外のフィルタ値（厳密パース時のみ）
    #[error("Unknown category filter: {0}")]
    UnknownCategory(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid contact form field: {0}")]
    InvalidContact(&'static str),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
