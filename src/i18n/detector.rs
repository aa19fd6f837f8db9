// SPDX-License-Identifier: MPL-2.0
//! Language detection from the signals available to the shell.
//!
//! Each strategy reads one signal. Strategies run in configured order and the
//! first candidate naming a supported language wins; unsupported candidates are
//! skipped silently.

use super::language::Language;
use super::storage::{LanguageStorage, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// One source of language candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionStrategy {
    /// Previously persisted choice.
    LocalStorage,
    /// Locales reported by the operating system.
    Navigator,
    /// Language hint supplied by the launcher.
    HtmlTag,
    /// First segment of the location path.
    Path,
    /// First label of the location host.
    Subdomain,
}

/// Ordered strategies plus persistence settings. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub order: Vec<DetectionStrategy>,
    pub storage_key: String,
    /// Strategies whose storage receives the resolved language.
    pub caches: Vec<DetectionStrategy>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            order: vec![
                DetectionStrategy::LocalStorage,
                DetectionStrategy::Navigator,
                DetectionStrategy::HtmlTag,
                DetectionStrategy::Path,
                DetectionStrategy::Subdomain,
            ],
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            caches: vec![DetectionStrategy::LocalStorage],
        }
    }
}

impl DetectionConfig {
    /// Whether the resolved language should be written back to storage.
    #[must_use]
    pub fn caches_to_storage(&self) -> bool {
        self.caches.contains(&DetectionStrategy::LocalStorage)
    }
}

/// Signals gathered by the shell at startup, except the persisted choice which
/// is read from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionContext {
    /// System locales in preference order.
    pub navigator: Vec<String>,
    /// Document-level language hint.
    pub html_tag: Option<String>,
    /// Current location of the shell.
    pub location: Option<Url>,
}

impl DetectionContext {
    /// Gathers system locales through `sys-locale`.
    #[must_use]
    pub fn from_system(html_tag: Option<String>, location: Option<Url>) -> Self {
        Self {
            navigator: sys_locale::get_locales().collect(),
            html_tag,
            location,
        }
    }

    fn path_candidate(&self) -> Option<String> {
        let location = self.location.as_ref()?;
        location
            .path_segments()?
            .find(|segment| !segment.is_empty())
            .map(str::to_string)
    }

    fn subdomain_candidate(&self) -> Option<String> {
        let host = self.location.as_ref()?.host_str()?;
        // `localhost` or a bare IP has no subdomain to speak of.
        if !host.contains('.') || host.parse::<std::net::IpAddr>().is_ok() {
            return None;
        }
        host.split('.').next().map(str::to_string)
    }
}

/// Runs the configured strategies in order.
///
/// Returns the first supported language along with the strategy that found it.
pub fn detect(
    config: &DetectionConfig,
    context: &DetectionContext,
    storage: &dyn LanguageStorage,
) -> Option<(Language, DetectionStrategy)> {
    for strategy in &config.order {
        let candidates: Vec<String> = match strategy {
            DetectionStrategy::LocalStorage => {
                storage.get(&config.storage_key).into_iter().collect()
            }
            DetectionStrategy::Navigator => context.navigator.clone(),
            DetectionStrategy::HtmlTag => context.html_tag.clone().into_iter().collect(),
            DetectionStrategy::Path => context.path_candidate().into_iter().collect(),
            DetectionStrategy::Subdomain => context.subdomain_candidate().into_iter().collect(),
        };

        for candidate in candidates {
            match Language::from_code(&candidate) {
                Some(language) => return Some((language, *strategy)),
                None => debug!(?strategy, %candidate, "discarding unsupported language"),
            }
        }
    }
    None
}
