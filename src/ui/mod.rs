//! Presentation helpers for the booking pages
//!
//! - [`notification`]: toast notifications and where they are delivered
//! - [`chrome`]: navigation bar, footer and modal markup
//! - [`format`]: date and time formatting of backend timestamps

pub mod chrome;
pub mod format;
pub mod notification;

pub use notification::{
    Notification, NotificationKind, NotificationOptions, Notifier, RecordingNotifier,
    TracingNotifier,
};
