// SPDX-License-Identifier: MPL-2.0
//! The closed set of languages the shell ships translations for.

use serde::{Deserialize, Serialize};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// Language used when detection yields nothing usable.
    pub const DEFAULT: Language = Language::Fr;

    /// Short language code, as used in file names and persisted state.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    /// All supported languages are left-to-right for now.
    #[must_use]
    pub fn direction(self) -> TextDirection {
        TextDirection::LeftToRight
    }

    /// Parses a BCP-47 tag (`fr`, `en-US`, `fr_CM`) and matches its primary
    /// language subtag against the supported set.
    ///
    /// Returns `None` for unparsable or unsupported tags.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Language> {
        let normalized = raw.trim().replace('_', "-");
        if normalized.is_empty() {
            return None;
        }
        // POSIX locales may carry an encoding suffix (`fr_FR.UTF-8`).
        let normalized = normalized.split('.').next().unwrap_or_default();
        let tag: LanguageIdentifier = normalized.parse().ok()?;
        match tag.language.as_str() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns the supported language codes.
#[must_use]
pub fn supported_languages() -> Vec<&'static str> {
    Language::ALL.iter().map(|language| language.code()).collect()
}
