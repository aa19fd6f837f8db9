// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! Time is always passed in, so expiry is deterministic.

use super::notification::{Kind, Notification, NotificationId, ToastDurations, ToastText};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 20;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic check of display windows.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Waiting for a free slot; their timer has not started.
    queue: VecDeque<Notification>,
    durations: ToastDurations,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_durations(durations: ToastDurations) -> Self {
        Self {
            durations,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn durations(&self) -> &ToastDurations {
        &self.durations
    }

    /// Shows `text` as a toast of `kind`, for `duration` or the kind default.
    pub fn notify(
        &mut self,
        kind: Kind,
        text: ToastText,
        duration: Option<Duration>,
        now: Instant,
    ) -> NotificationId {
        let mut notification = Notification::with_text(kind, text);
        if let Some(duration) = duration {
            notification = notification.with_duration(duration);
        }
        self.push(notification, now)
    }

    /// Pushes a notification. It is shown at `now` if a slot is free, otherwise
    /// it waits in the queue.
    pub fn push(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        if notification.kind() == Kind::Error {
            error!(?id, text = ?notification.text(), "error notification");
        }

        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(now);
            self.visible.push_front(notification);
        } else {
            debug!(?id, queued = self.queue.len() + 1, "notification queued");
            self.queue.push_back(notification);
        }
        id
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes every visible toast whose window has closed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let durations = self.durations;
        let before = self.visible.len();
        self.visible
            .retain(|notification| !notification.is_expired(now, &durations));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Tick(instant) => {
                self.tick(*instant);
            }
        }
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Queued toasts start their window when promoted.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn success_toast_boundary() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"), start);

        manager.tick(start + ms(2999));
        assert_eq!(manager.visible_count(), 1);

        manager.tick(start + ms(3000));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn kinds_use_their_default_durations() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::info("info"), start);
        manager.push(Notification::error("error"), start);

        manager.tick(start + ms(4000));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::kind),
            Some(Kind::Error)
        );

        manager.tick(start + ms(5000));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn explicit_duration_is_honored() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.notify(
            Kind::Info,
            ToastText::Plain("short".into()),
            Some(ms(500)),
            start,
        );
        manager.tick(start + ms(499));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(start + ms(500));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn configured_durations_apply() {
        let start = Instant::now();
        let mut manager = Manager::with_durations(ToastDurations {
            success: ms(100),
            ..ToastDurations::default()
        });
        manager.push(Notification::success("quick"), start);
        manager.tick(start + ms(100));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn newest_toast_is_first() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::plain(Kind::Info, "first"), start);
        manager.push(Notification::plain(Kind::Info, "second"), start);
        let texts: Vec<_> = manager.visible().map(|n| n.text().clone()).collect();
        assert_eq!(
            texts,
            vec![
                ToastText::Plain("second".into()),
                ToastText::Plain("first".into())
            ]
        );
    }

    #[test]
    fn overflow_queues_and_starts_timer_on_promotion() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(
                Notification::success(format!("visible-{i}")).with_duration(ms(1000)),
                start,
            );
        }
        let queued = manager.push(Notification::success("queued"), start);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        let promoted_at = start + ms(1000);
        manager.tick(promoted_at);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
        let promoted = manager.visible().next().expect("promoted toast");
        assert_eq!(promoted.id(), queued);
        assert_eq!(promoted.shown_at(), Some(promoted_at));

        manager.tick(promoted_at + ms(2999));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(promoted_at + ms(3000));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_removes_and_promotes() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let first = manager.push(Notification::info("first"), start);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::info(format!("visible-{i}")), start);
        }
        manager.push(Notification::info("queued"), start);

        assert!(manager.dismiss(first, start));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id, Instant::now()));
    }

    #[test]
    fn handle_message_dispatches() {
        let start = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(Notification::error("boom"), start);
        manager.push(Notification::success("ok"), start);

        manager.handle_message(&Message::Dismiss(id), start);
        assert_eq!(manager.visible_count(), 1);

        manager.handle_message(&Message::Tick(start + ms(3000)), start);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..(MAX_VISIBLE + 5) {
            manager.push(Notification::success(format!("test-{i}")), start);
        }
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
