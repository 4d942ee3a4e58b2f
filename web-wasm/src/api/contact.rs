//! お問い合わせフォーム送信
//!
//! 送信先はGoogle Apps Script。no-corsなので応答の中身は読めず、
//! fetchが解決すれば成功扱い。

use roma_tours_common::ContactSubmission;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode};

const CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyCCMWS7u39z76S7-DypDfdb-cbM9MVhdfZA5b8DV5nQFXuMhnteEsztEu1lzp6Zcmu/exec";

fn to_form_data(submission: &ContactSubmission) -> Result<FormData, JsValue> {
    let form_data = FormData::new()?;
    for (name, value) in submission.fields() {
        form_data.append_with_str(name, &value)?;
    }
    Ok(form_data)
}

/// フォームをPOST
pub async fn send_contact(submission: &ContactSubmission) -> Result<(), JsValue> {
    if let Ok(json) = serde_json::to_string(submission) {
        gloo::console::log!("Form data being sent:", json);
    }

    let body = to_form_data(submission)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::NoCors);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    JsFuture::from(window.fetch_with_request(&request)).await?;
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roma_tours_common::ContactForm;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_form_data_carries_timestamp() {
        let form = ContactForm {
            first_name: "Marco".into(),
            last_name: "Bianchi".into(),
            email: "marco@example.it".into(),
            message: "Group booking for ten?".into(),
            newsletter: false,
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let submission = form.into_submission(now).expect("検証失敗");

        let data = to_form_data(&submission).expect("FormData作成失敗");
        assert_eq!(data.get("timestamp").as_string().as_deref(), Some("2024-05-01T09:30:00.000Z"));
        assert!(data.get("newsletter").is_null());
    }
}
