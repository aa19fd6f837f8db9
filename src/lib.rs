// SPDX-License-Identifier: MPL-2.0
//! `chopexpress` is the desktop shell of the ChopExpress restaurant-ordering
//! platform, built with the Iced GUI framework.
//!
//! It resolves the user's language (French or English), routes locations to
//! pages, shows toast notifications, and can refresh its translations from the
//! backend through a small cached HTTP client.

pub mod app;
pub mod error;
pub mod http;
pub mod i18n;
pub mod query;
pub mod router;
pub mod ui;
