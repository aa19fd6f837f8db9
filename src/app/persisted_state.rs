// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! State that should survive a restart but is not a user preference lives in
//! `state.cbor` in the data directory, separate from the editable
//! `settings.toml`. Today that is only the chosen language.

use super::paths;
use crate::error::{Error, Result};
use crate::i18n::LanguageStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{debug, warn};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Warning key shown when the state file cannot be read.
pub const STATE_LOAD_WARNING: &str = "notifications.state_load_error";

/// Key/value entries persisted across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl AppState {
    /// Loads state from `base_dir`, or the default location when `None`.
    ///
    /// Returns default state plus a warning key when the file exists but cannot
    /// be read or decoded.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let decoded = fs::File::open(&path)
            .map_err(Error::from)
            .and_then(|file| {
                ciborium::from_reader(BufReader::new(file))
                    .map_err(|error| Error::State(error.to_string()))
            });

        match decoded {
            Ok(state) => (state, None),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to load application state");
                (Self::default(), Some(STATE_LOAD_WARNING.to_string()))
            }
        }
    }

    /// Saves state to `base_dir`, or the default location, creating the
    /// directory if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = state_file_path(base_dir)
            .ok_or_else(|| Error::State("no data directory available".into()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer).map_err(|error| Error::State(error.to_string()))?;
        debug!(path = %path.display(), "application state saved");
        Ok(())
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|path| path.join(STATE_FILE))
}

/// File-backed language storage. Every write is flushed to disk.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    state: AppState,
    base_dir: Option<PathBuf>,
}

impl StateStore {
    /// Opens the store, returning a warning key if the file was unreadable.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (state, warning) = AppState::load_from(base_dir.clone());
        (Self { state, base_dir }, warning)
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl LanguageStorage for StateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.get(key).as_deref() == Some(value) {
            return Ok(());
        }
        self.state
            .entries
            .insert(key.to_string(), value.to_string());
        self.state.save_to(self.base_dir.clone())
    }
}
