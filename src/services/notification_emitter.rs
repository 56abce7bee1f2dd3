//! Ephemeral, severity-tagged notifications.
//!
//! Each posted notification lives for a fixed TTL and then expires on its
//! own. Notifications are independent: no deduplication, no throttling, no
//! ordering beyond posting order. Observers subscribe to a broadcast stream
//! of [`NotificationEvent`]s.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::domain::models::{Notification, NotificationEvent, Severity};

/// How long a notification stays live by default.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(4500);

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct LiveNotification {
    notification: Notification,
    expires_at: Instant,
}

type LiveSet = Arc<Mutex<Vec<LiveNotification>>>;

/// Posts notifications and tracks the ones that have not yet expired.
#[derive(Debug)]
pub struct NotificationEmitter {
    ttl: Duration,
    live: LiveSet,
    events: broadcast::Sender<NotificationEvent>,
}

impl NotificationEmitter {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            ttl,
            live: Arc::new(Mutex::new(Vec::new())),
            events,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Post a notification. It expires `ttl` after posting.
    pub fn post(&self, message: impl Into<String>, severity: Severity) -> Notification {
        let notification = Notification::new(message, severity);
        let expires_at = Instant::now() + self.ttl;

        lock(&self.live).push(LiveNotification {
            notification: notification.clone(),
            expires_at,
        });
        debug!(
            id = %notification.id,
            severity = %severity,
            message = %notification.message,
            "notification posted"
        );

        // No receivers is fine; observers are optional.
        let _ = self.events.send(NotificationEvent::Posted(notification.clone()));
        self.schedule_expiry(notification.id, expires_at);

        notification
    }

    pub fn info(&self, message: impl Into<String>) -> Notification {
        self.post(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.post(message, Severity::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> Notification {
        self.post(message, Severity::Warning)
    }

    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.post(message, Severity::Error)
    }

    /// Notifications that have not yet expired, oldest first.
    pub fn live(&self) -> Vec<Notification> {
        let now = Instant::now();
        let mut live = lock(&self.live);
        live.retain(|n| n.expires_at > now);
        live.iter().map(|n| n.notification.clone()).collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.events.subscribe()
    }

    /// Emit `Expired` once the deadline passes. Outside a runtime the live
    /// set still expires lazily through [`Self::live`].
    fn schedule_expiry(&self, id: uuid::Uuid, expires_at: Instant) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let live = Arc::clone(&self.live);
        let events = self.events.clone();
        handle.spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            lock(&live).retain(|n| n.notification.id != id);
            trace!(%id, "notification expired");
            let _ = events.send(NotificationEvent::Expired { id });
        });
    }
}

impl Default for NotificationEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(live: &LiveSet) -> std::sync::MutexGuard<'_, Vec<LiveNotification>> {
    live.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notification_expires_after_ttl() {
        let emitter = NotificationEmitter::new();
        emitter.info("hello");

        tokio::time::advance(Duration::from_millis(4400)).await;
        assert_eq!(emitter.live().len(), 1);

        tokio::time::advance(Duration::from_millis(200)).await;
        assert!(emitter.live().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_are_independent() {
        let emitter = NotificationEmitter::new();
        emitter.warning("first");
        tokio::time::advance(Duration::from_millis(3000)).await;
        emitter.warning("first");

        let live = emitter.live();
        assert_eq!(live.len(), 2, "duplicates are not merged");

        tokio::time::advance(Duration::from_millis(2000)).await;
        let live = emitter.live();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].message, "first");
    }

    #[tokio::test]
    async fn test_post_defaults_and_severity() {
        let emitter = NotificationEmitter::new();
        let n = emitter.info("plain");
        assert_eq!(n.severity, Severity::default());
        assert_eq!(n.severity, Severity::Info);

        let n = emitter.error("boom");
        assert_eq!(n.severity, Severity::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_posted_and_expired() {
        let emitter = NotificationEmitter::with_ttl(Duration::from_millis(100));
        let mut rx = emitter.subscribe();

        let posted = emitter.success("saved");

        match rx.recv().await.unwrap() {
            NotificationEvent::Posted(n) => assert_eq!(n, posted),
            other => panic!("expected Posted, got {other:?}"),
        }
        match rx.recv().await.unwrap() {
            NotificationEvent::Expired { id } => assert_eq!(id, posted.id),
            other => panic!("expected Expired, got {other:?}"),
        }
        assert!(emitter.live().is_empty());
    }
}
