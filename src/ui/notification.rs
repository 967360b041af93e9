//! Toast notifications
//!
//! A [`Notification`] describes one toast: its kind, text and the
//! presentation options of the booking pages. Where it ends up is decided
//! by a [`Notifier`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

/// Text shown in place of the message when the notification type is unknown
pub const UNRECOGNIZED_TYPE_MESSAGE: &str = "PushNotification exception: unrecognized type";

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Notice,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Notice => "notice",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            other => Err(format!("unrecognized notification type: {other}")),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button labels of a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLabels {
    pub close: String,
    pub pin: String,
    pub unstick: String,
}

impl Default for NotificationLabels {
    fn default() -> Self {
        Self {
            close: "chiudi".to_string(),
            pin: "blocca".to_string(),
            unstick: "sblocca".to_string(),
        }
    }
}

/// Presentation options shared by every toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    pub title: String,

    /// Milliseconds before the toast closes itself
    pub delay: u64,

    /// Toasts open at once before the oldest is closed
    pub max_open: usize,

    pub labels: NotificationLabels,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            title: "Esito Operazione".to_string(),
            delay: 2000,
            max_open: 5,
            labels: NotificationLabels::default(),
        }
    }
}

/// One toast notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub options: NotificationOptions,
}

impl Notification {
    pub fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            options: NotificationOptions::default(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, text)
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Notice, text)
    }

    /// Build a notification from a type name
    ///
    /// An unknown type still yields a notification: an error whose text
    /// is [`UNRECOGNIZED_TYPE_MESSAGE`], replacing the message.
    ///
    /// ```
    /// use labkit::ui::notification::{Notification, NotificationKind};
    ///
    /// let toast = Notification::from_type("warning", "Saved");
    /// assert_eq!(toast.kind, NotificationKind::Error);
    /// ```
    pub fn from_type(kind: &str, text: impl Into<String>) -> Self {
        match kind.parse() {
            Ok(kind) => Self::new(kind, text),
            Err(_) => {
                tracing::warn!(kind, "Unrecognized notification type");
                Self::error(UNRECOGNIZED_TYPE_MESSAGE)
            }
        }
    }

    pub fn with_options(mut self, options: NotificationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Sink for notifications
pub trait Notifier: Send + Sync {
    fn push(&self, notification: Notification);
}

/// Notifier that writes each toast to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn push(&self, notification: Notification) {
        let Notification { kind, text, options } = notification;
        match kind {
            NotificationKind::Error => {
                tracing::error!(kind = %kind, title = %options.title, "{}", text)
            }
            NotificationKind::Notice => {
                tracing::warn!(kind = %kind, title = %options.title, "{}", text)
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = %kind, title = %options.title, "{}", text)
            }
        }
    }
}

/// Notifier that keeps every toast in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pushed: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications pushed so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.pushed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.pushed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.pushed.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn push(&self, notification: Notification) {
        self.pushed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
