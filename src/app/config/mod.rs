// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file. The shell never writes the file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[i18n]` - Fallback language, detection order, remote bundles
//! - `[notifications]` - Toast durations per kind
//! - `[query]` - Fetch cache freshness and retries
//! - `[server]` - Application origin and development proxy table
//!
//! Every field is optional; missing values take their defaults.
//!
//! # Examples
//!
//! ```no_run
//! use chopexpress::app::config;
//!
//! let (config, _warning) = config::load();
//! assert_eq!(config.query.retry, 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::http::ProxyRule;
use crate::i18n::backend::DEFAULT_LOAD_PATH;
use crate::i18n::{DetectionConfig, Language};
use crate::query::QueryDefaults;
use crate::ui::notifications::ToastDurations;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notifications.config_load_error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme_mode: ThemeMode,
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used when detection finds nothing and for missing keys.
    pub fallback_language: Language,
    pub detection: DetectionConfig,
    /// Fetch bundles from the origin at startup, replacing the embedded ones.
    pub remote_bundles: bool,
    /// Request path of remote bundles; `{{lng}}` is the language code.
    pub load_path: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            fallback_language: Language::DEFAULT,
            detection: DetectionConfig::default(),
            remote_bundles: false,
            load_path: DEFAULT_LOAD_PATH.to_string(),
        }
    }
}

/// Origin and development proxy table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub origin: String,
    pub proxy: Vec<ProxyRule>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            proxy: DEFAULT_PROXY_PREFIXES
                .iter()
                .map(|prefix| ProxyRule::new(*prefix, DEFAULT_BACKEND_ORIGIN))
                .collect(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub i18n: I18nConfig,
    pub notifications: ToastDurations,
    pub query: QueryDefaults,
    pub server: ServerConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|path| path.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key to show to the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to load configuration");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Tests
// =============================================================================
