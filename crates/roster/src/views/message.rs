//! Status messages attached to list views.

use std::fmt;

use roster_toast::Variant;
use serde::{Deserialize, Serialize};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    /// Toast variant used when this message is surfaced as a toast.
    pub fn toast_variant(self) -> Variant {
        match self {
            MessageLevel::Error => Variant::Destructive,
            _ => Variant::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status message shown under a list, e.g. the empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

impl Message {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shortcuts() {
        assert_eq!(Message::info("x").level, MessageLevel::Info);
        assert_eq!(Message::success("x").level, MessageLevel::Success);
        assert_eq!(Message::warning("x").level, MessageLevel::Warning);
        assert_eq!(Message::error("x").level, MessageLevel::Error);
    }

    #[test]
    fn only_errors_are_destructive() {
        assert_eq!(MessageLevel::Error.toast_variant(), Variant::Destructive);
        assert_eq!(MessageLevel::Warning.toast_variant(), Variant::Default);
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&Message::warning("No engineers available")).unwrap();
        assert!(json.contains("\"level\":\"warning\""));
        assert!(json.contains("\"text\":\"No engineers available\""));
    }

    #[test]
    fn display() {
        assert_eq!(Message::info("No matches").to_string(), "[info] No matches");
    }
}
