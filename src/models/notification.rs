// POST /phone-notification payload and its normalized form

use serde::Deserialize;

pub const DEFAULT_PACKAGE_NAME: &str = "unknown_app";
pub const MAX_PACKAGE_CHARS: usize = 200;
pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_TEXT_CHARS: usize = 500;
/// Limits applied to the desktop notifier's summary and body arguments.
pub const MAX_SUMMARY_CHARS: usize = 200;
pub const MAX_BODY_CHARS: usize = 500;

/// Body as sent by the companion app. Every field is optional; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub posted_at: serde_json::Value,
}

impl NotificationPayload {
    /// Parse a raw request body. An empty body is read as `{}`.
    pub fn parse(raw: &[u8]) -> serde_json::Result<Self> {
        let raw = if raw.is_empty() { b"{}".as_slice() } else { raw };
        serde_json::from_slice(raw)
    }
}

/// Trimmed, truncated and defaulted notification, ready to log and display.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub package_name: String,
    pub title: String,
    pub text: String,
    /// Opaque pass-through value; logged only.
    pub posted_at: serde_json::Value,
}

impl From<NotificationPayload> for NotificationRequest {
    fn from(payload: NotificationPayload) -> Self {
        let package_name = normalize(payload.package_name.as_deref(), MAX_PACKAGE_CHARS);
        Self {
            package_name: if package_name.is_empty() {
                DEFAULT_PACKAGE_NAME.to_string()
            } else {
                package_name
            },
            title: normalize(payload.title.as_deref(), MAX_TITLE_CHARS),
            text: normalize(payload.text.as_deref(), MAX_TEXT_CHARS),
            posted_at: payload.posted_at,
        }
    }
}

impl NotificationRequest {
    /// False when both title and text are empty after trimming.
    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.text.is_empty()
    }

    /// Desktop summary line: "Phone: <title>", or a generic line when there is no title.
    pub fn summary(&self) -> String {
        let summary = if self.title.is_empty() {
            "Phone notification".to_string()
        } else {
            format!("Phone: {}", self.title)
        };
        truncate_chars(&summary, MAX_SUMMARY_CHARS).to_string()
    }

    /// Desktop body line: the text, falling back to the app name.
    pub fn body(&self) -> String {
        let body = if self.text.is_empty() {
            &self.package_name
        } else {
            &self.text
        };
        truncate_chars(body, MAX_BODY_CHARS).to_string()
    }
}

fn normalize(value: Option<&str>, max_chars: usize) -> String {
    truncate_chars(value.unwrap_or_default().trim(), max_chars).to_string()
}

/// Cut `s` to at most `max_chars` Unicode scalar values.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
