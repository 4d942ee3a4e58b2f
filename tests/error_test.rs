//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use roma_tours::config::Config;
use roma_tours::error::ToursError;
use roma_tours::load_catalog;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないデータファイル
#[test]
fn test_load_nonexistent_data_file() {
    let result = load_catalog(Some(Path::new("/nonexistent/path/locations.json")), &Config::default());
    assert!(matches!(result, Err(ToursError::DataFileNotFound(_))));
}

/// 壊れたJSON
#[test]
fn test_load_broken_data_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("locations.json");
    std::fs::write(&path, "[{ broken").unwrap();

    let result = load_catalog(Some(&path), &Config::default());
    assert!(matches!(
        result,
        Err(ToursError::Common(roma_tours_common::Error::Json(_)))
    ));
}

/// 重複キーのカタログ
#[test]
fn test_load_duplicate_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("locations.json");
    let record = r#"{"key":"a","title":"A","summary":"","description":"","address":"","images":["x"]}"#;
    std::fs::write(&path, format!("[{},{}]", record, record)).unwrap();

    let err = load_catalog(Some(&path), &Config::default()).unwrap_err();
    assert!(format!("{}", err).contains("duplicate key: a"));
}

/// ToursErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ToursError::Config("テスト設定エラー".to_string()),
        ToursError::DataFileNotFound("locations.json".to_string()),
        ToursError::Common(roma_tours_common::Error::LocationNotFound("atlantis".into())),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ToursError = io_err.into();

    assert!(matches!(err, ToursError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ToursError = json_err.into();

    assert!(matches!(err, ToursError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_error_chain_transparent() {
    let common_err = roma_tours_common::Error::UnknownCategory("baroque".to_string());
    let err: ToursError = common_err.into();

    assert!(matches!(err, ToursError::Common(_)));
    assert_eq!(format!("{}", err), "Unknown category filter: baroque");
}
