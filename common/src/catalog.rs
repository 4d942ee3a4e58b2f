//! ロケーションカタログ
//!
//! 正規化されたJSON（LocationRecord配列）を一度だけ読み込み、
//! 一覧用のサマリと詳細テーブルに分けて保持する。読み込み後は不変。

use crate::error::{Error, Result};
use crate::types::{LocationDetail, LocationRecord, LocationSummary};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// 組み込みデータ（ローマの観光地11件）
const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.json");

/// コメント日付の形式
const COMMENT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Catalog {
    /// 挿入順 = 表示順
    summaries: Vec<LocationSummary>,
    details: HashMap<String, LocationDetail>,
}

impl Catalog {
    /// 組み込みデータからカタログを構築
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LOCATIONS)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<LocationRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_records(records: Vec<LocationRecord>) -> Result<Self> {
        validate(&records)?;

        let summaries = records.iter().map(LocationRecord::to_summary).collect();
        let details = records
            .iter()
            .map(|r| (r.key.clone(), r.to_detail()))
            .collect();

        Ok(Self { summaries, details })
    }

    pub fn summaries(&self) -> &[LocationSummary] {
        &self.summaries
    }

    pub fn summary(&self, key: &str) -> Option<&LocationSummary> {
        self.summaries.iter().find(|s| s.key == key)
    }

    pub fn detail(&self, key: &str) -> Option<&LocationDetail> {
        self.details.get(key)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

fn validate(records: &[LocationRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for record in records {
        if record.key.trim().is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "empty key for \"{}\"",
                record.title
            )));
        }
        if !seen.insert(record.key.as_str()) {
            return Err(Error::InvalidCatalog(format!("duplicate key: {}", record.key)));
        }
        if record.images.is_empty() {
            return Err(Error::InvalidCatalog(format!("no images for {}", record.key)));
        }
        for comment in &record.comments {
            if NaiveDate::parse_from_str(&comment.date, COMMENT_DATE_FORMAT).is_err() {
                return Err(Error::InvalidCatalog(format!(
                    "bad comment date \"{}\" in {}",
                    comment.date, record.key
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn record(key: &str) -> LocationRecord {
        LocationRecord {
            key: key.to_string(),
            title: key.to_uppercase(),
            summary: String::new(),
            description: String::new(),
            address: String::new(),
            categories: vec![],
            images: vec!["https://example.com/a.jpg".to_string()],
            comments: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().expect("組み込みカタログ読み込み失敗");
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.summaries()[0].key, "colosseum");

        let pantheon = catalog.summary("pantheon").unwrap();
        assert_eq!(pantheon.categories, vec![Category::Ancient, Category::Religious]);

        // 全サマリに対応する詳細がある
        for summary in catalog.summaries() {
            let detail = catalog.detail(&summary.key).expect("詳細がない");
            assert_eq!(detail.title, summary.title);
            assert!(!detail.images.is_empty());
        }
    }

    #[test]
    fn test_detail_lookup_miss() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.detail("atlantis").is_none());
        assert!(catalog.summary("atlantis").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = Catalog::from_records(vec![record("a"), record("a")]);
        assert!(matches!(result, Err(Error::InvalidCatalog(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_empty_images_rejected() {
        let mut r = record("a");
        r.images.clear();
        assert!(matches!(Catalog::from_records(vec![r]), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_bad_comment_date_rejected() {
        let mut r = record("a");
        r.comments.push(crate::types::Comment {
            author: "X".into(),
            text: "Y".into(),
            date: "15/03/2024".into(),
        });
        assert!(matches!(Catalog::from_records(vec![r]), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
