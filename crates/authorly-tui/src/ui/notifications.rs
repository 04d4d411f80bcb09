// Centralized notification/toast system for TUI status feedback
// Mutations return change values; this queue is how the presentation layer
// chooses to surface them.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use authorly_core::constants::UNDO_TOAST_SECS;

/// Notification priority levels (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
    /// Lifecycle toasts set this so 'u' undoes while the toast is visible.
    /// The undo affordance dies with the toast; the store's undo slot does not.
    pub offers_undo: bool,
}

impl Notification {
    /// Create an info notification (default 3 second duration)
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration: Duration::from_secs(3),
            shown_at: None,
            offers_undo: false,
        }
    }

    /// Create a success notification (default 3 second duration)
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: Duration::from_secs(3),
            shown_at: None,
            offers_undo: false,
        }
    }

    /// Create a warning notification (default 4 second duration)
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration: Duration::from_secs(4),
            shown_at: None,
            offers_undo: false,
        }
    }

    /// Create an error notification (default 5 second duration)
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration: Duration::from_secs(5),
            shown_at: None,
            offers_undo: false,
        }
    }

    /// Create a lifecycle toast carrying the time-boxed undo affordance
    pub fn with_undo(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: Duration::from_secs(UNDO_TOAST_SECS),
            shown_at: None,
            offers_undo: true,
        }
    }

    /// Set a custom duration for this notification
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if this notification has expired
    pub fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Mark this notification as being shown now
    pub fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

/// Queue of notifications with priority handling
#[derive(Debug, Default)]
pub struct NotificationQueue {
    /// Queue of pending notifications (front = next to show)
    queue: VecDeque<Notification>,
    /// Currently displayed notification
    current: Option<Notification>,
    /// Track recent messages for deduplication (message hash -> expiry)
    recent_messages: Vec<(u64, Instant)>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue.
    /// Higher priority notifications replace lower priority ones (the old
    /// notification is dropped, not re-queued).
    pub fn push(&mut self, notification: Notification) {
        // Check for duplicate (same message shown recently)
        let hash = Self::hash_message(&notification.message);
        let now = Instant::now();

        self.recent_messages.retain(|(_, expiry)| *expiry > now);

        if self.recent_messages.iter().any(|(h, _)| *h == hash) {
            return; // Skip duplicate
        }

        self.recent_messages
            .push((hash, now + Duration::from_secs(2)));

        if let Some(ref current) = self.current {
            if notification.level > current.level {
                self.current = Some(notification);
                if let Some(ref mut n) = self.current {
                    n.mark_shown();
                }
                return;
            }
        }

        if self.current.is_none() {
            let mut n = notification;
            n.mark_shown();
            self.current = Some(n);
        } else {
            // Insert by priority (higher priority at front)
            let pos = self
                .queue
                .iter()
                .position(|n| n.level < notification.level)
                .unwrap_or(self.queue.len());
            self.queue.insert(pos, notification);
        }
    }

    /// Get the current notification being displayed
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Whether the currently visible toast carries the undo affordance
    pub fn current_offers_undo(&self) -> bool {
        self.current.as_ref().is_some_and(|n| n.offers_undo)
    }

    /// Dismiss the current notification
    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance();
    }

    /// Update the queue - advance to next notification if current expired
    pub fn tick(&mut self) {
        if let Some(ref current) = self.current {
            if current.is_expired() {
                self.current = None;
                self.advance();
            }
        }
    }

    /// Advance to the next notification in queue
    fn advance(&mut self) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown();
                self.current = Some(next);
            }
        }
    }

    /// Check if there are any notifications (current or pending)
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// Simple hash for deduplication
    fn hash_message(message: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        message.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("test");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.duration, Duration::from_secs(3));

        let n = Notification::error("error").duration(Duration::from_secs(10));
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.duration, Duration::from_secs(10));
    }

    #[test]
    fn test_queue_basic() {
        let mut q = NotificationQueue::new();
        assert!(q.is_empty());

        q.push(Notification::info("first"));
        assert!(!q.is_empty());
        assert_eq!(q.current().unwrap().message, "first");

        q.dismiss();
        assert!(q.is_empty());
    }

    #[test]
    fn test_priority_replaces_current() {
        let mut q = NotificationQueue::new();

        q.push(Notification::info("low priority"));
        assert_eq!(q.current().unwrap().message, "low priority");

        // Error replaces info (info is dropped, not re-queued)
        q.push(Notification::error("high priority"));
        assert_eq!(q.current().unwrap().message, "high priority");

        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_undo_affordance_tracks_current_toast_only() {
        let mut q = NotificationQueue::new();
        q.push(Notification::with_undo("Request accepted"));
        assert!(q.current_offers_undo());

        // A higher-priority toast replacing it takes the affordance away
        q.push(Notification::error("boom"));
        assert!(!q.current_offers_undo());
    }

    #[test]
    fn test_level_ordering() {
        assert!(NotificationLevel::Error > NotificationLevel::Warning);
        assert!(NotificationLevel::Warning > NotificationLevel::Success);
        assert!(NotificationLevel::Success > NotificationLevel::Info);
    }
}
