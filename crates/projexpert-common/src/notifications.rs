use std::collections::VecDeque;
use std::time::Duration;

// Toasts share tokio's clock with the sync timer and script waits.
use tokio::time::Instant;

/// A short-lived message shown in the bottom-right corner.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates a toast that lives for `ttl`.
    pub fn toast(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Returns `true` if this notification has exceeded its TTL at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// A bounded queue of toasts that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Pushes a notification, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired(Instant::now());
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Returns all currently visible (non-expired) notifications.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.visible_at(Instant::now())
    }

    /// Returns the notifications still visible at `now`.
    pub fn visible_at(&mut self, now: Instant) -> Vec<&Notification> {
        self.evict_expired(now);
        self.items.iter().collect()
    }

    /// Returns the number of notifications currently in the queue (including expired).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired_at(now));
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}
