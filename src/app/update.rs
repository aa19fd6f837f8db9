// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the pieces of `App` they
//! may touch, so each one can be exercised without a running window.

use super::{persistence, Message};
use crate::error::Error;
use crate::i18n::backend::HttpBackend;
use crate::i18n::{I18n, Language, LoadState, LocaleBundle};
use crate::query::QueryClient;
use crate::router::{Page, Router};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// Toast shown when a remote bundle could not be fetched.
pub const LOCALE_LOAD_FAILED_KEY: &str = "notifications.locale_load_failed";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub router: &'a Router,
    pub location: &'a mut Option<Url>,
    pub page: &'a mut Page,
    pub language_menu_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
    pub query: &'a mut QueryClient<LocaleBundle>,
    pub backend: Option<&'a HttpBackend>,
    pub now: Instant,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.language_menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(page) => handle_navigate(ctx, page),
        NavbarEvent::LanguageSelected(language) => {
            if persistence::apply_language_change(ctx.i18n, ctx.notifications, language, ctx.now) {
                fetch_locale_if_stale(ctx, language)
            } else {
                Task::none()
            }
        }
    }
}

/// Navigates to the canonical path of `page`.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, page: Page) -> Task<Message> {
    let path = ctx.router.path_for(page).to_string();
    handle_navigate_to_path(ctx, &path)
}

/// Replaces the location path and re-runs the router.
pub fn handle_navigate_to_path(ctx: &mut UpdateContext<'_>, path: &str) -> Task<Message> {
    if let Some(location) = ctx.location.as_mut() {
        match location.join(path) {
            Ok(next) => *location = next,
            Err(error) => warn!(path, %error, "cannot apply path to location"),
        }
    }

    let target = ctx.router.match_path(path);
    if target != *ctx.page {
        debug!(from = %ctx.page, to = %target, path, "navigating");
    }
    *ctx.page = target;
    *ctx.language_menu_open = false;
    Task::none()
}

pub fn handle_locale_fetched(
    ctx: &mut UpdateContext<'_>,
    language: Language,
    result: Result<LocaleBundle, Error>,
) -> Task<Message> {
    match result {
        Ok(bundle) => {
            ctx.query
                .set(HttpBackend::cache_key(language), bundle.clone(), ctx.now);
            ctx.i18n.replace_bundle(bundle);
        }
        Err(error) => {
            warn!(%language, %error, "remote locale bundle unavailable");
            if *ctx.i18n.load_state() == LoadState::Loading {
                ctx.i18n.set_load_state(LoadState::Failed(error.to_string()));
            }
            ctx.notifications.push(
                Notification::error(LOCALE_LOAD_FAILED_KEY).with_arg("language", language.code()),
                ctx.now,
            );
        }
    }

    ctx.query.collect_garbage(ctx.now);
    Task::none()
}

pub fn handle_window_focused(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.query.defaults().refetch_on_window_focus {
        return Task::none();
    }
    let language = ctx.i18n.current_language();
    fetch_locale_if_stale(ctx, language)
}

/// Starts a remote fetch of `language` unless a fresh copy is cached.
pub fn fetch_locale_if_stale(ctx: &mut UpdateContext<'_>, language: Language) -> Task<Message> {
    let Some(backend) = ctx.backend else {
        return Task::none();
    };
    if !ctx.query.needs_fetch(&HttpBackend::cache_key(language), ctx.now) {
        return Task::none();
    }
    fetch_locale(backend, language)
}

/// Runs the backend fetch on the executor and reports back with a message.
pub fn fetch_locale(backend: &HttpBackend, language: Language) -> Task<Message> {
    let backend = backend.clone();
    Task::perform(backend.fetch(language), move |result| Message::LocaleFetched {
        language,
        result,
    })
}
