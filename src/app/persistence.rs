// SPDX-License-Identifier: MPL-2.0
//! Language preference persistence.
//!
//! The chosen language is written through the i18n context's storage, which
//! the shell backs with `state.cbor`.

use crate::i18n::{I18n, Language};
use crate::ui::notifications::{self, Notification};
use std::time::Instant;
use tracing::info;

/// Toast shown after the user picks a language.
pub const LANGUAGE_CHANGED_KEY: &str = "notifications.language_changed";

/// Applies the newly selected language, persists it and confirms with a toast.
///
/// Returns `false` when `language` was already active; nothing is shown then.
pub fn apply_language_change(
    i18n: &mut I18n,
    notifications: &mut notifications::Manager,
    language: Language,
    now: Instant,
) -> bool {
    if i18n.current_language() == language {
        return false;
    }

    i18n.set_language(language);
    info!(%language, "language changed by user");

    notifications.push(
        Notification::success(LANGUAGE_CHANGED_KEY).with_arg("language", language.display_name()),
        now,
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DetectionConfig, LanguageStorage, MemoryStorage, DEFAULT_STORAGE_KEY};
    use crate::ui::notifications::Kind;

    #[test]
    fn change_switches_language_and_notifies() {
        let mut i18n = I18n::default();
        let mut manager = notifications::Manager::new();

        assert!(apply_language_change(&mut i18n, &mut manager, Language::En, Instant::now()));
        assert_eq!(i18n.current_language(), Language::En);

        let toast = manager.visible().next().expect("toast shown");
        assert_eq!(toast.kind(), Kind::Success);
        assert_eq!(toast.text().resolve(&i18n), "Language: English");
    }

    #[test]
    fn selecting_active_language_is_a_no_op() {
        let mut i18n = I18n::default();
        let mut manager = notifications::Manager::new();

        assert!(!apply_language_change(&mut i18n, &mut manager, Language::Fr, Instant::now()));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn change_is_written_to_storage() {
        let storage = MemoryStorage::new();
        let mut i18n = I18n::new(
            DetectionConfig::default(),
            Language::Fr,
            Box::new(storage.clone()),
        );
        let mut manager = notifications::Manager::new();

        apply_language_change(&mut i18n, &mut manager, Language::En, Instant::now());

        assert_eq!(storage.get(DEFAULT_STORAGE_KEY).as_deref(), Some("en"));
    }
}
