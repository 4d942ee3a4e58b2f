//! ナビゲーションボタンのスクロール先

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// ページ先頭
    Top,
    /// id指定のセクション
    Section(&'static str),
}

impl NavTarget {
    /// ボタンのラベルから判定
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "home" => Some(NavTarget::Top),
            "tours" => Some(NavTarget::Section("tours")),
            "contact" => Some(NavTarget::Section("contact")),
            _ => None,
        }
    }
}
