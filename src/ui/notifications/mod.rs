// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the top-right corner and never block
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Kind` and text
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notifications.language_changed"), Instant::now());
//!
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Durations: info 4s, success 3s, error 5s, each overridable. Up to 20 toasts
//! are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Kind, Notification, NotificationId, ToastDurations, ToastText};
pub use toast::Toast;
