//! お問い合わせフォーム
//!
//! 送信先は外部サービス（応答は読まない）。ここでは入力検証と
//! 送信データの組み立て、通知メッセージだけを扱う。

use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const SENDING_LABEL: &str = "Sending...";

/// 通知の自動消去
pub const NOTIFICATION_DISMISS_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub newsletter: bool,
}

/// 送信データ（フォーム項目 + タイムスタンプ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub form: ContactForm,
    pub timestamp: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(Error::InvalidContact("firstName"));
        }
        if self.last_name.trim().is_empty() {
            return Err(Error::InvalidContact("lastName"));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(Error::InvalidContact("email"));
        }
        if self.message.trim().is_empty() {
            return Err(Error::InvalidContact("message"));
        }
        Ok(())
    }

    /// 検証してタイムスタンプを付ける
    pub fn into_submission(self, now: DateTime<Utc>) -> Result<ContactSubmission> {
        self.validate()?;
        Ok(ContactSubmission {
            form: self,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

impl ContactSubmission {
    /// フォームエンコード用の項目一覧
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("firstName", self.form.first_name.clone()),
            ("lastName", self.form.last_name.clone()),
            ("email", self.form.email.clone()),
            ("message", self.form.message.clone()),
        ];
        if self.form.newsletter {
            fields.push(("newsletter", "on".to_string()));
        }
        fields.push(("timestamp", self.timestamp.clone()));
        fields
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// 画面右上の通知（同時に1つだけ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE,
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            message: FAILURE_MESSAGE,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "bg-green-500 text-white",
            NotificationKind::Error => "bg-red-500 text-white",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> ContactForm {
        ContactForm {
            first_name: "Giulia".into(),
            last_name: "Rossi".into(),
            email: "giulia@example.it".into(),
            message: "Do you run evening tours?".into(),
            newsletter: true,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_validate_fields() {
        let mut f = form();
        f.first_name = "  ".into();
        assert!(matches!(f.validate(), Err(Error::InvalidContact("firstName"))));

        let mut f = form();
        f.email = "giulia.example.it".into();
        assert!(matches!(f.validate(), Err(Error::InvalidContact("email"))));

        let mut f = form();
        f.email = "a@b@c.it".into();
        assert!(matches!(f.validate(), Err(Error::InvalidContact("email"))));

        let mut f = form();
        f.message.clear();
        assert!(matches!(f.validate(), Err(Error::InvalidContact("message"))));
    }

    #[test]
    fn test_submission_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let submission = form().into_submission(now).unwrap();
        assert_eq!(submission.timestamp, "2024-03-15T09:30:00.000Z");

        let fields = submission.fields();
        assert!(fields.contains(&("newsletter", "on".to_string())));
        assert_eq!(fields.last().unwrap().0, "timestamp");

        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"firstName\":\"Giulia\""));
        assert!(json.contains("\"timestamp\":\"2024-03-15T09:30:00.000Z\""));
    }

    #[test]
    fn test_newsletter_omitted_when_unchecked() {
        let mut f = form();
        f.newsletter = false;
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let fields = f.into_submission(now).unwrap().fields();
        assert!(fields.iter().all(|(k, _)| *k != "newsletter"));
    }

    #[test]
    fn test_notifications() {
        assert_eq!(Notification::sent().message, "Message sent successfully!");
        assert_eq!(Notification::failed().kind, NotificationKind::Error);
        assert!(Notification::failed().css_class().contains("red"));
    }
}
