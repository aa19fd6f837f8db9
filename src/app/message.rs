// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::i18n::{Language, LocaleBundle};
use crate::router::Page;
use crate::ui::navbar;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Go to `page` through its canonical path.
    Navigate(Page),
    /// Go to an arbitrary path, resolved by the router.
    NavigateToPath(String),
    /// A remote locale bundle finished loading.
    LocaleFetched {
        language: Language,
        result: Result<LocaleBundle, Error>,
    },
    /// The window gained focus.
    WindowFocused,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Document language hint in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Initial location, e.g. `http://localhost:3000/orders`.
    pub url: Option<String>,
    /// Takes precedence over `CHOPEXPRESS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `CHOPEXPRESS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
