//! ロケーションデータの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - LocationRecord: 正規化されたソースJSONの1件
//! - LocationSummary: 一覧カード・検索フィルタ用
//! - LocationDetail: モーダル詳細表示用

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 観光地カテゴリ（固定列挙）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ancient,
    Religious,
    Modern,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Ancient, Category::Religious, Category::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ancient => "ancient",
            Category::Religious => "religious",
            Category::Modern => "modern",
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ancient => "Ancient",
            Category::Religious => "Religious",
            Category::Modern => "Modern",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ancient" => Ok(Category::Ancient),
            "religious" => Ok(Category::Religious),
            "modern" => Ok(Category::Modern),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// 口コミ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    /// ISO-8601 日付 (YYYY-MM-DD)
    pub date: String,
}

/// ソースJSONの1レコード（一覧と詳細の両方の元データ）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub key: String,
    pub title: String,
    /// カード表示用の短い説明
    pub summary: String,
    /// モーダル表示用の長い説明
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub images: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// 一覧カード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub key: String,
    pub title: String,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl LocationSummary {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// モーダル詳細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    pub key: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub comments: Vec<Comment>,
}

impl LocationRecord {
    pub fn to_summary(&self) -> LocationSummary {
        LocationSummary {
            key: self.key.clone(),
            title: self.title.clone(),
            description: self.summary.clone(),
            address: self.address.clone(),
            categories: self.categories.clone(),
        }
    }

    pub fn to_detail(&self) -> LocationDetail {
        LocationDetail {
            key: self.key.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            images: self.images.clone(),
            comments: self.comments.clone(),
        }
    }
}
