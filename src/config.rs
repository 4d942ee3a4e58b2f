use crate::error::{ToursError, Result};
use roma_tours_common::{Theme, DEFAULT_DEBOUNCE_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 保存済みテーマ（未設定ならOS設定に従う）
    pub theme: Option<Theme>,
    /// 組み込みデータの代わりに読むカタログJSON
    pub data_file: Option<PathBuf>,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            data_file: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ToursError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("roma-tours").join("config.json"))
    }

    /// 実際に使うテーマ（CLIにはOS設定がないのでライト扱い）
    pub fn effective_theme(&self) -> Theme {
        Theme::resolve(self.theme.map(Theme::as_str), false)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.effective_theme().toggle();
        self.theme = Some(next);
        next
    }
}
