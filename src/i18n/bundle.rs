// SPDX-License-Identifier: MPL-2.0
//! Locale bundles and the store holding one bundle per language.
//!
//! Bundles are nested JSON objects whose leaves are strings. They are embedded
//! in the binary so the shell can render translated text without any network
//! access; a remote backend may later replace a bundle wholesale.

use super::language::Language;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Separator between path segments of a translation key.
pub const KEY_SEPARATOR: char = '.';

/// Separator between an optional namespace and the key.
pub const NS_SEPARATOR: char = ':';

/// The only namespace the shell uses.
pub const DEFAULT_NAMESPACE: &str = "translation";

/// All translated strings for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBundle {
    language: Language,
    translations: Map<String, Value>,
}

impl LocaleBundle {
    /// Builds a bundle from an already parsed JSON object.
    #[must_use]
    pub fn new(language: Language, translations: Map<String, Value>) -> Self {
        Self {
            language,
            translations,
        }
    }

    /// Parses a bundle from JSON text. The document root must be an object.
    pub fn from_json(language: Language, source: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(source)? {
            Value::Object(map) => Ok(Self::new(language, map)),
            _ => Err(Error::Locale(format!(
                "translation file for {language} is not a JSON object"
            ))),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolves a dotted key to its string.
    ///
    /// Returns `None` when any segment is missing or the target is not a string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let key = strip_namespace(key);
        let mut segments = key.split(KEY_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.translations.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    /// Number of string leaves in the bundle.
    #[must_use]
    pub fn key_count(&self) -> usize {
        fn count(value: &Value) -> usize {
            match value {
                Value::Object(map) => map.values().map(count).sum(),
                Value::String(_) => 1,
                _ => 0,
            }
        }
        self.translations.values().map(count).sum()
    }
}

fn strip_namespace(key: &str) -> &str {
    match key.split_once(NS_SEPARATOR) {
        Some((namespace, rest)) if namespace == DEFAULT_NAMESPACE => rest,
        _ => key,
    }
}

/// One bundle per supported language.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    bundles: HashMap<Language, LocaleBundle>,
}

impl ResourceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every embedded `<code>.json` file whose code is a supported language.
    ///
    /// Fails on the first file that does not parse; files for unsupported codes
    /// are skipped.
    pub fn embedded() -> Result<Self> {
        let mut store = Self::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(code) = filename.strip_suffix(".json") else {
                continue;
            };
            let Some(language) = Language::from_code(code) else {
                debug!(file = filename, "skipping locale file for unsupported language");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref());
                let bundle = LocaleBundle::from_json(language, &source)?;
                debug!(
                    language = %language,
                    keys = bundle.key_count(),
                    "loaded embedded locale bundle"
                );
                store.insert(bundle);
            }
        }
        Ok(store)
    }

    /// Inserts a bundle, replacing any previous bundle for the same language.
    pub fn insert(&mut self, bundle: LocaleBundle) {
        self.bundles.insert(bundle.language(), bundle);
    }

    #[must_use]
    pub fn get(&self, language: Language) -> Option<&LocaleBundle> {
        self.bundles.get(&language)
    }

    #[must_use]
    pub fn contains(&self, language: Language) -> bool {
        self.bundles.contains_key(&language)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
