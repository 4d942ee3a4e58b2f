//! ダークモード設定
//!
//! 永続化するのは "theme" キーの "dark" / "light" だけ。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 保存キー
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 保存値があればそれを、なければOS設定に従う
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved.and_then(Self::from_stored) {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        // 不正値は未保存扱い
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::Light.toggle();
        assert!(theme.is_dark());
        assert_eq!(Theme::from_stored(theme.as_str()), Some(Theme::Dark));
        assert_eq!(theme.toggle(), Theme::Light);
    }
}
