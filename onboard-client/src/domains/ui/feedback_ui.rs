//! Transient operator notifications ("toasts").
//!
//! The form reports outcomes through a [`NotificationSink`] and never waits
//! for an acknowledgment. [`ToastManager`] is the in-memory sink a front end
//! renders from.

use std::fmt;

use log::debug;
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{title, variant, message}` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub level: ToastLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: ToastLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            level,
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title, message)
    }
}

/// Fire-and-forget destination for notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotification {
    pub id: ToastId,
    pub notification: Notification,
}

#[derive(Debug, Default)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<ToastNotification>,
}

/// Keeps active toasts in arrival order until they are dismissed.
#[derive(Debug, Default)]
pub struct ToastManager {
    queue: Mutex<ToastQueue>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) -> ToastId {
        let mut queue = self.queue.lock();
        let id = ToastId(queue.next_id);
        queue.next_id += 1;
        debug!(
            "Toast {} [{}] {}: {}",
            id.0, notification.level, notification.title, notification.message
        );
        queue.toasts.push(ToastNotification { id, notification });
        id
    }

    /// Snapshot of the active toasts, oldest first.
    pub fn toasts(&self) -> Vec<ToastNotification> {
        self.queue.lock().toasts.clone()
    }

    pub fn has_toasts(&self) -> bool {
        !self.queue.lock().toasts.is_empty()
    }

    pub fn count_level(&self, level: ToastLevel) -> usize {
        self.queue
            .lock()
            .toasts
            .iter()
            .filter(|toast| toast.notification.level == level)
            .count()
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut queue = self.queue.lock();
        let before = queue.toasts.len();
        queue.toasts.retain(|toast| toast.id != id);
        queue.toasts.len() != before
    }

    pub fn clear(&self) {
        self.queue.lock().toasts.clear();
    }
}

impl NotificationSink for ToastManager {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_arrival_order_and_unique_ids() {
        let manager = ToastManager::new();
        let first = manager.push(Notification::success("Saved", "ok"));
        let second = manager.push(Notification::error("Failed", "nope"));

        assert_ne!(first, second);
        let toasts = manager.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].id, first);
        assert_eq!(toasts[1].notification.level, ToastLevel::Error);
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let manager = ToastManager::new();
        let first = manager.push(Notification::success("a", "a"));
        let second = manager.push(Notification::success("b", "b"));

        assert!(manager.dismiss(first));
        assert!(!manager.dismiss(first));
        let toasts = manager.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let manager = ToastManager::new();
        let first = manager.push(Notification::success("a", "a"));
        manager.clear();
        assert!(!manager.has_toasts());

        let next = manager.push(Notification::success("b", "b"));
        assert!(next > first);
    }

    #[test]
    fn sink_counts_by_level() {
        let manager = ToastManager::new();
        let sink: &dyn NotificationSink = &manager;
        sink.notify(Notification::error("x", "y"));
        sink.notify(Notification::success("x", "y"));
        sink.notify(Notification::error("x", "z"));

        assert_eq!(manager.count_level(ToastLevel::Error), 2);
        assert_eq!(manager.count_level(ToastLevel::Success), 1);
        assert_eq!(manager.count_level(ToastLevel::Warning), 0);
    }
}
