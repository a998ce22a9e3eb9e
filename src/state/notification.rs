//! Timed, auto-dismissing notifications

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Default display duration for a notification
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message shown to the user until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    /// Wall-clock creation time, shown on the toast and logged on expiry
    pub created_at: DateTime<Utc>,
    /// Monotonic creation time, used for expiry
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= duration
    }
}

/// Live notifications, each with an independent lifetime
#[derive(Debug)]
pub struct NotificationTray {
    live: Vec<Notification>,
    duration: Duration,
}

impl Default for NotificationTray {
    fn default() -> Self {
        Self::new(NOTIFICATION_DURATION)
    }
}

impl NotificationTray {
    pub fn new(duration: Duration) -> Self {
        Self {
            live: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.live.push(notification);
    }

    /// Remove every notification whose display time has elapsed.
    /// Returns the removed notifications, oldest first.
    pub fn expire(&mut self, now: Instant) -> Vec<Notification> {
        let duration = self.duration;
        let (expired, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.live)
            .into_iter()
            .partition(|n| n.is_expired(now, duration));
        self.live = live;
        expired
    }

    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    #[allow(dead_code)]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(expired: Vec<Notification>) -> Vec<Uuid> {
        expired.into_iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_default_duration_is_three_seconds() {
        let tray = NotificationTray::default();
        assert_eq!(tray.duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_new_notifications_have_distinct_ids() {
        let now = Instant::now();
        let a = Notification::new(NotificationKind::Success, "a", now);
        let b = Notification::new(NotificationKind::Success, "a", now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_created_at_is_wall_clock_now() {
        let before = Utc::now();
        let n = Notification::new(NotificationKind::Success, "done", Instant::now());
        let after = Utc::now();
        assert!(before <= n.created_at && n.created_at <= after);
    }

    #[test]
    fn test_expired_notifications_keep_their_creation_time() {
        let t = Instant::now();
        let mut tray = NotificationTray::default();
        let n = Notification::new(NotificationKind::Error, "network down", t);
        let created_at = n.created_at;
        tray.push(n);

        let expired = tray.expire(t + Duration::from_millis(3000));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].created_at, created_at);
    }

    #[test]
    fn test_removed_exactly_at_duration() {
        let t = Instant::now();
        let mut tray = NotificationTray::default();
        let n = Notification::new(NotificationKind::Error, "network down", t);
        let id = n.id;
        tray.push(n);

        assert!(tray.expire(t + Duration::from_millis(2999)).is_empty());
        assert_eq!(tray.live().len(), 1);

        assert_eq!(ids(tray.expire(t + Duration::from_millis(3000))), vec![id]);
        assert!(tray.live().is_empty());
    }

    #[test]
    fn test_lifetimes_are_independent() {
        let t = Instant::now();
        let mut tray = NotificationTray::default();
        let first = Notification::new(NotificationKind::Success, "first", t);
        let second = Notification::new(
            NotificationKind::Error,
            "second",
            t + Duration::from_millis(1000),
        );
        let (first_id, second_id) = (first.id, second.id);
        tray.push(first);
        tray.push(second);

        assert_eq!(
            ids(tray.expire(t + Duration::from_millis(3000))),
            vec![first_id]
        );
        assert_eq!(tray.live().len(), 1);
        assert_eq!(
            ids(tray.expire(t + Duration::from_millis(4000))),
            vec![second_id]
        );
    }

    #[test]
    fn test_expire_on_empty_tray() {
        let mut tray = NotificationTray::default();
        assert!(tray.expire(Instant::now()).is_empty());
    }
}
