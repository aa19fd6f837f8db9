// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! [`I18n`] is the single localization context of the shell. It owns the locale
//! bundles, the active language and the storage of the user's choice, and it is
//! passed by reference to every view that renders text.
//!
//! # Features
//!
//! - Language detection from storage, system locales, launcher hint, location
//! - Nested JSON bundles addressed with dotted keys
//! - `{{var}}` interpolation with `uppercase`, `lowercase`, `currency`, `date`
//! - Runtime language switching with change observers
//! - Fallback to the default language, then to the caller's literal

pub mod backend;
pub mod bundle;
pub mod detector;
pub mod format;
pub mod language;
pub mod storage;

pub use bundle::{LocaleBundle, ResourceStore};
pub use detector::{DetectionConfig, DetectionContext, DetectionStrategy};
pub use language::{supported_languages, Language, TextDirection};
pub use storage::{LanguageStorage, MemoryStorage, DEFAULT_STORAGE_KEY};

use tracing::{debug, info, warn};

/// Readiness of the translation resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Resources could not be loaded; views render their fallback literals.
    Failed(String),
}

/// Handle returned by [`I18n::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Language) + Send>;

/// Localization context: bundles, active language, persisted choice, observers.
pub struct I18n {
    store: ResourceStore,
    current: Language,
    fallback: Language,
    detection: DetectionConfig,
    storage: Box<dyn LanguageStorage>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    load_state: LoadState,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("fallback", &self.fallback)
            .field("load_state", &self.load_state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(
            DetectionConfig::default(),
            Language::DEFAULT,
            Box::new(MemoryStorage::new()),
        )
    }
}

impl I18n {
    /// Creates a context backed by the embedded bundles.
    ///
    /// A bundle that fails to parse leaves the context in
    /// [`LoadState::Failed`]; lookups then fall back to caller literals.
    pub fn new(
        detection: DetectionConfig,
        fallback: Language,
        storage: Box<dyn LanguageStorage>,
    ) -> Self {
        let (store, load_state) = match ResourceStore::embedded() {
            Ok(store) => (store, LoadState::Ready),
            Err(error) => {
                warn!(%error, "failed to load embedded locale bundles");
                (ResourceStore::new(), LoadState::Failed(error.to_string()))
            }
        };
        Self::with_store(store, detection, fallback, storage, load_state)
    }

    /// Creates a context over an explicit store.
    pub fn with_store(
        store: ResourceStore,
        detection: DetectionConfig,
        fallback: Language,
        storage: Box<dyn LanguageStorage>,
        load_state: LoadState,
    ) -> Self {
        Self {
            store,
            current: fallback,
            fallback,
            detection,
            storage,
            listeners: Vec::new(),
            next_listener: 0,
            load_state,
        }
    }

    /// Runs detection and activates the result, or the fallback language when
    /// no strategy yields a supported code.
    pub fn resolve(&mut self, context: &DetectionContext) -> Language {
        let resolved = match detector::detect(&self.detection, context, self.storage.as_ref()) {
            Some((language, strategy)) => {
                info!(%language, ?strategy, "language detected");
                language
            }
            None => {
                info!(language = %self.fallback, "no language detected, using fallback");
                self.fallback
            }
        };

        if self.detection.caches_to_storage() {
            self.persist(resolved);
        }
        self.switch_to(resolved);
        resolved
    }

    /// Activates `language`, persists it, and notifies observers if it changed.
    pub fn set_language(&mut self, language: Language) {
        self.persist(language);
        self.switch_to(language);
    }

    /// Like [`I18n::set_language`] for a raw code. Unsupported codes are
    /// ignored and `None` is returned.
    pub fn set_language_code(&mut self, code: &str) -> Option<Language> {
        let Some(language) = Language::from_code(code) else {
            debug!(code, "ignoring unsupported language code");
            return None;
        };
        self.set_language(language);
        Some(language)
    }

    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    #[must_use]
    pub fn fallback_language(&self) -> Language {
        self.fallback
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.current.direction()
    }

    /// Registers an observer called with the new language after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(Language) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes an observer. Returns `false` when the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn set_load_state(&mut self, state: LoadState) {
        self.load_state = state;
    }

    /// Replaces the bundle for its language wholesale and marks resources ready.
    pub fn replace_bundle(&mut self, bundle: LocaleBundle) {
        info!(language = %bundle.language(), "replacing locale bundle");
        self.store.insert(bundle);
        self.load_state = LoadState::Ready;
    }

    /// Translates `key` in the active language.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.translate(key, None, &[])
    }

    /// Translates `key`, substituting `args` into its placeholders.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.translate(key, None, args)
    }

    /// Translates `key`, returning `fallback` when it is missing everywhere.
    #[must_use]
    pub fn tr_or(&self, key: &str, fallback: &str) -> String {
        self.translate(key, Some(fallback), &[])
    }

    /// Resolves `key` in the active bundle, then in the fallback language's
    /// bundle, then returns `fallback` or the raw key. Never panics.
    #[must_use]
    pub fn translate(&self, key: &str, fallback: Option<&str>, vars: &[(&str, &str)]) -> String {
        let template = self
            .lookup_in(self.current, key)
            .or_else(|| {
                (self.fallback != self.current)
                    .then(|| self.lookup_in(self.fallback, key))
                    .flatten()
            });

        match template {
            Some(template) => format::interpolate(template, vars, self.current),
            None => {
                self.report_missing(key);
                match fallback {
                    Some(literal) => format::interpolate(literal, vars, self.current),
                    None => key.to_string(),
                }
            }
        }
    }

    /// Whether `key` resolves in the active language or the fallback language.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.lookup_in(self.current, key).is_some() || self.lookup_in(self.fallback, key).is_some()
    }

    fn lookup_in(&self, language: Language, key: &str) -> Option<&str> {
        self.store.get(language)?.lookup(key)
    }

    fn report_missing(&self, key: &str) {
        if cfg!(debug_assertions) {
            warn!(key, language = %self.current, "missing translation key");
        }
    }

    fn persist(&mut self, language: Language) {
        if let Err(error) = self.storage.set(&self.detection.storage_key, language.code()) {
            warn!(%error, %language, "failed to persist language choice");
        }
    }

    fn switch_to(&mut self, language: Language) {
        if self.current == language {
            return;
        }
        self.current = language;
        info!(%language, "language changed");
        for (_, listener) in &mut self.listeners {
            listener(language);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use std::sync::{Arc, Mutex};

    fn i18n_with(storage: MemoryStorage) -> I18n {
        I18n::new(DetectionConfig::default(), Language::Fr, Box::new(storage))
    }

    #[test]
    fn no_signal_resolves_to_french() {
        let mut i18n = i18n_with(MemoryStorage::new());
        assert_eq!(i18n.resolve(&DetectionContext::default()), Language::Fr);
        assert_eq!(i18n.current_language(), Language::Fr);
    }

    #[test]
    fn resolve_persists_detected_language() {
        let storage = MemoryStorage::new();
        let mut i18n = i18n_with(storage.clone());
        let context = DetectionContext {
            navigator: vec!["en-US".into()],
            ..DetectionContext::default()
        };
        assert_eq!(i18n.resolve(&context), Language::En);
        assert_eq!(storage.get(DEFAULT_STORAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn set_language_survives_simulated_reload() {
        for language in Language::ALL {
            let storage = MemoryStorage::new();
            let mut i18n = i18n_with(storage.clone());
            i18n.set_language(language);
            assert_eq!(i18n.current_language(), language);

            let mut reloaded = i18n_with(storage);
            let context = DetectionContext {
                navigator: vec!["de-DE".into()],
                ..DetectionContext::default()
            };
            assert_eq!(reloaded.resolve(&context), language);
        }
    }

    #[test]
    fn unsupported_code_is_ignored() {
        let mut i18n = i18n_with(MemoryStorage::new());
        assert_eq!(i18n.set_language_code("de"), None);
        assert_eq!(i18n.current_language(), Language::Fr);
        assert_eq!(i18n.set_language_code("en-GB"), Some(Language::En));
        assert_eq!(i18n.current_language(), Language::En);
    }

    #[test]
    fn present_keys_translate_to_non_empty_strings() {
        let mut i18n = i18n_with(MemoryStorage::new());
        for language in Language::ALL {
            i18n.set_language(language);
            for key in ["menu.title", "menu.features.quality_desc", "dev.info.title"] {
                let value = i18n.tr(key);
                assert!(!value.is_empty());
                assert_ne!(value, key);
            }
        }
    }

    #[test]
    fn absent_key_returns_exact_fallback_or_key() {
        let i18n = i18n_with(MemoryStorage::new());
        assert_eq!(i18n.tr_or("menu.nope", "X"), "X");
        assert_eq!(i18n.tr_or("nope.deeper.still", "X"), "X");
        assert_eq!(i18n.tr("menu.nope"), "menu.nope");
    }

    #[test]
    fn translation_follows_active_language() {
        let mut i18n = i18n_with(MemoryStorage::new());
        assert_eq!(i18n.tr("menu.coming_soon"), "Bientôt disponible");
        i18n.set_language(Language::En);
        assert_eq!(i18n.tr("menu.coming_soon"), "Coming soon");
    }

    #[test]
    fn missing_key_in_active_language_uses_fallback_language() {
        let mut store = ResourceStore::new();
        store.insert(
            LocaleBundle::from_json(Language::Fr, r#"{ "only": { "fr": "seulement" } }"#)
                .expect("fr"),
        );
        store.insert(LocaleBundle::from_json(Language::En, "{}").expect("en"));
        let mut i18n = I18n::with_store(
            store,
            DetectionConfig::default(),
            Language::Fr,
            Box::new(MemoryStorage::new()),
            LoadState::Ready,
        );
        i18n.set_language(Language::En);
        assert_eq!(i18n.tr("only.fr"), "seulement");
        assert!(i18n.has_key("only.fr"));
    }

    #[test]
    fn currency_directive_formats_in_french() {
        let i18n = i18n_with(MemoryStorage::new());
        let rendered = i18n.translate(
            "missing.fee",
            Some("{{amount, currency}}"),
            &[("amount", "1000")],
        );
        assert!(rendered.contains("1 000"));
        assert!(rendered.contains("FCFA"));
    }

    #[test]
    fn interpolation_applies_to_bundle_templates() {
        let i18n = i18n_with(MemoryStorage::new());
        assert_eq!(
            i18n.tr_with_args("notifications.locale_load_failed", &[("language", "en")]),
            "Impossible de charger les traductions (EN)"
        );
    }

    #[test]
    fn observers_fire_once_per_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut i18n = i18n_with(MemoryStorage::new());
        let sink = Arc::clone(&seen);
        let id = i18n.subscribe(move |language| sink.lock().expect("lock").push(language));

        i18n.set_language(Language::En);
        i18n.set_language(Language::En);
        i18n.set_language(Language::Fr);
        assert!(i18n.unsubscribe(id));
        i18n.set_language(Language::En);

        assert_eq!(*seen.lock().expect("lock"), vec![Language::En, Language::Fr]);
        assert!(!i18n.unsubscribe(id));
    }

    struct FailingStorage;

    impl LanguageStorage for FailingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::State("read-only".into()))
        }
    }

    #[test]
    fn storage_failure_is_not_fatal() {
        let mut i18n = I18n::new(
            DetectionConfig::default(),
            Language::Fr,
            Box::new(FailingStorage),
        );
        i18n.set_language(Language::En);
        assert_eq!(i18n.current_language(), Language::En);
    }

    #[test]
    fn empty_store_still_renders_fallbacks() {
        let i18n = I18n::with_store(
            ResourceStore::new(),
            DetectionConfig::default(),
            Language::Fr,
            Box::new(MemoryStorage::new()),
            LoadState::Failed("offline".into()),
        );
        assert_eq!(i18n.tr_or("menu.title", "Menu des Restaurants"), "Menu des Restaurants");
        assert_eq!(i18n.load_state(), &LoadState::Failed("offline".into()));
    }

    #[test]
    fn replace_bundle_marks_ready() {
        let mut i18n = i18n_with(MemoryStorage::new());
        i18n.set_load_state(LoadState::Loading);
        i18n.replace_bundle(
            LocaleBundle::from_json(Language::Fr, r#"{ "menu": { "title": "Carte" } }"#)
                .expect("fr"),
        );
        assert_eq!(i18n.load_state(), &LoadState::Ready);
        assert_eq!(i18n.tr("menu.title"), "Carte");
    }
}
