use serde::{Deserialize, Serialize};

use crate::config::GuideConfig;

/// Timeline of a transient element, measured from the moment it is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifetime {
    /// When the enter transition is triggered.
    pub enter_after_ms: u32,
    /// When the exit transition is triggered. `None` means the element stays
    /// until it is dismissed explicitly.
    pub exit_after_ms: Option<u32>,
    pub exit_transition_ms: u32,
}

impl Lifetime {
    /// When the element is detached, if it leaves on its own.
    pub fn removal_after_ms(&self) -> Option<u32> {
        self.exit_after_ms
            .map(|exit| exit.saturating_add(self.exit_transition_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Notification {
    Success { message: String },
    CopySuccess,
}

impl Notification {
    pub fn method_selected(method: u32) -> Self {
        Notification::Success {
            message: format!("Method {method} selected successfully!"),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Success { message } => message,
            Notification::CopySuccess => "Command copied to clipboard!",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Notification::Success { .. } => "success-notification",
            Notification::CopySuccess => "copy-notification",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Notification::Success { .. } => "fas fa-check-circle",
            Notification::CopySuccess => "fas fa-check",
        }
    }

    pub fn lifetime(&self, config: &GuideConfig) -> Lifetime {
        let visible = match self {
            Notification::Success { .. } => config.success_notification_ms,
            Notification::CopySuccess => config.copy_notification_ms,
        };
        Lifetime {
            enter_after_ms: config.notification_enter_ms,
            exit_after_ms: Some(visible),
            exit_transition_ms: config.transition_ms,
        }
    }
}

pub fn completion_modal_lifetime(config: &GuideConfig) -> Lifetime {
    Lifetime {
        enter_after_ms: config.notification_enter_ms,
        exit_after_ms: None,
        exit_transition_ms: config.transition_ms,
    }
}

pub fn confetti_lifetime(config: &GuideConfig) -> Lifetime {
    Lifetime {
        enter_after_ms: 0,
        exit_after_ms: Some(config.confetti_lifetime_ms),
        exit_transition_ms: 0,
    }
}
