// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification carries its kind, its text and an optional duration. The
//! display window starts when the manager shows it, not when it is created.

use crate::i18n::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of toast. Determines accent color and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Info => palette::INFO_400,
            Kind::Success => palette::SUCCESS_400,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Single-character glyph shown before the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Info => "i",
            Kind::Success => "✓",
            Kind::Error => "!",
        }
    }
}

/// Default display time per kind, in milliseconds in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDurations {
    #[serde(rename = "info_ms", with = "millis")]
    pub info: Duration,
    #[serde(rename = "success_ms", with = "millis")]
    pub success: Duration,
    #[serde(rename = "error_ms", with = "millis")]
    pub error: Duration,
}

impl Default for ToastDurations {
    fn default() -> Self {
        Self {
            info: Duration::from_millis(4000),
            success: Duration::from_millis(3000),
            error: Duration::from_millis(5000),
        }
    }
}

impl ToastDurations {
    #[must_use]
    pub fn for_kind(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Info => self.info,
            Kind::Success => self.success,
            Kind::Error => self.error,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// What a toast says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastText {
    /// Translation key, resolved at render time so it follows language changes.
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    /// Literal text shown as is.
    Plain(String),
}

impl ToastText {
    /// Renders the text in the active language.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            ToastText::Key { key, args } if args.is_empty() => i18n.tr(key),
            ToastText::Key { key, args } => {
                let args: Vec<(&str, &str)> = args
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
            ToastText::Plain(text) => text.clone(),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    text: ToastText,
    /// Overrides the kind's default duration.
    duration: Option<Duration>,
    /// Set when the notification becomes visible.
    shown_at: Option<Instant>,
}

impl Notification {
    /// Creates a notification whose text is the translation of `message_key`.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self::with_text(
            kind,
            ToastText::Key {
                key: message_key.into(),
                args: Vec::new(),
            },
        )
    }

    /// Creates a notification showing `text` verbatim.
    pub fn plain(kind: Kind, text: impl Into<String>) -> Self {
        Self::with_text(kind, ToastText::Plain(text.into()))
    }

    pub fn with_text(kind: Kind, text: ToastText) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            text,
            duration: None,
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Adds an interpolation argument. No effect on plain text.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ToastText::Key { args, .. } = &mut self.text {
            args.push((name.into(), value.into()));
        }
        self
    }

    /// Sets an explicit duration, overriding the kind default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &ToastText {
        &self.text
    }

    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Effective display time.
    #[must_use]
    pub fn duration(&self, defaults: &ToastDurations) -> Duration {
        self.duration
            .unwrap_or_else(|| defaults.for_kind(self.kind))
    }

    /// Instant at which the toast disappears, once shown.
    #[must_use]
    pub fn expires_at(&self, defaults: &ToastDurations) -> Option<Instant> {
        self.shown_at
            .map(|shown_at| shown_at + self.duration(defaults))
    }

    /// Whether `now` is at or past the end of the display window.
    #[must_use]
    pub fn is_expired(&self, now: Instant, defaults: &ToastDurations) -> bool {
        self.expires_at(defaults)
            .is_some_and(|expires_at| now >= expires_at)
    }
}
