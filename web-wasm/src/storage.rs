//! テーマ設定の保存（localStorage）

use roma_tours_common::{Theme, THEME_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// 保存値とOS設定からテーマを決める
pub fn load_theme(system_prefers_dark: bool) -> Theme {
    let saved = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::resolve(saved.as_deref(), system_prefers_dark)
}

pub fn save_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        gloo::console::warn!("localStorageが使えません");
        return;
    };
    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        gloo::console::warn!("テーマ保存失敗", e);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_saved_theme_wins_over_system() {
        save_theme(Theme::Dark);
        assert_eq!(load_theme(false), Theme::Dark);

        save_theme(Theme::Light);
        assert_eq!(load_theme(true), Theme::Light);
    }
}
