use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Auto-hide delay shared by toasts and non-permanent flash alerts.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// How long the fade transition runs before the element is removed.
pub const FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastLevel {
    /// Unknown keys fall back to info rather than failing the caller.
    pub fn from_key(key: &str) -> Self {
        match key {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            _ => Self::Info,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A page-level alert. Non-permanent flashes are auto-dismissed once,
/// AUTO_DISMISS_MS after render, through the same path as a manual close.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub uuid: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub permanent: bool,
}

impl Flash {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            message: message.into(),
            level,
            permanent: false,
        }
    }

    pub fn permanent(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            permanent: true,
            ..Self::new(message, level)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToastLevel;

    #[test]
    fn unknown_level_key_defaults_to_info() {
        assert_eq!(ToastLevel::from_key("success"), ToastLevel::Success);
        assert_eq!(ToastLevel::from_key("danger"), ToastLevel::Danger);
        assert_eq!(ToastLevel::from_key("primary"), ToastLevel::Info);
        assert_eq!(ToastLevel::from_key(""), ToastLevel::Info);
        assert_eq!(ToastLevel::default(), ToastLevel::Info);
    }

    #[test]
    fn level_classes_are_stable() {
        assert_eq!(ToastLevel::Warning.as_class(), "warning");
        assert_eq!(
            ToastLevel::from_key(ToastLevel::Success.as_class()),
            ToastLevel::Success
        );
    }
}
