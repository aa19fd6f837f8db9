// SPDX-License-Identifier: MPL-2.0
//! Application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override**, the argument of the `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`), set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CHOPEXPRESS_DATA_DIR`, `CHOPEXPRESS_CONFIG_DIR`)
//! 4. **Platform default** via `dirs`, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// Application name used for directory naming.
const APP_NAME: &str = "ChopExpress";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "CHOPEXPRESS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CHOPEXPRESS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` flags.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if !record_overrides(&CLI_DATA_DIR, &CLI_CONFIG_DIR, data_dir, config_dir) {
        debug!("directory overrides already initialized");
    }
}

/// Fills each cell independently. Returns `false` if either was already set.
fn record_overrides(
    data_cell: &OnceLock<Option<PathBuf>>,
    config_cell: &OnceLock<Option<PathBuf>>,
    data_dir: Option<String>,
    config_dir: Option<String>,
) -> bool {
    let data_set = data_cell.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = config_cell.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

fn cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Directory holding persisted application state (`state.cbor`).
///
/// Returns `None` if the platform directory cannot be determined.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|path| path.join(APP_NAME)))
}

/// Directory holding user preferences (`settings.toml`).
///
/// Returns `None` if the platform directory cannot be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
}
