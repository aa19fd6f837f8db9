// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Toast expiry resolution.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks the notification layer while any toast is visible or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL)
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}

/// Reports window focus so stale resources can be refetched.
pub fn create_focus_subscription(refetch_on_focus: bool) -> Subscription<Message> {
    if !refetch_on_focus {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocused),
        _ => None,
    })
}
