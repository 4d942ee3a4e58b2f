//! roma-tours CLI
//!
//! 観光地カタログを端末から検索・閲覧する。

pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal;

use config::Config;
use error::{Result, ToursError};
use roma_tours_common::Catalog;
use std::path::Path;

/// カタログを読み込む（引数 > 設定ファイル > 組み込みデータ）
pub fn load_catalog(data: Option<&Path>, config: &Config) -> Result<Catalog> {
    match data.or(config.data_file.as_deref()) {
        Some(path) => {
            if !path.exists() {
                return Err(ToursError::DataFileNotFound(path.display().to_string()));
            }
            tracing::debug!(path = %path.display(), "loading catalog from file");
            Ok(Catalog::from_file(path)?)
        }
        None => Ok(Catalog::builtin()?),
    }
}
