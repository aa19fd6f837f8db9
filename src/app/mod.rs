// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the router, localization
//! and the notification layer.
//!
//! The `App` struct wires together the domains and translates messages into
//! side effects like persisting the chosen language or fetching remote locale
//! bundles.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::http::RequestResolver;
use crate::i18n::backend::HttpBackend;
use crate::i18n::{DetectionContext, I18n, LoadState, LocaleBundle};
use crate::query::QueryClient;
use crate::router::{Page, Router};
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::placeholder;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::StateStore;
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    router: Router,
    /// Current location; `None` when no valid origin was configured.
    location: Option<Url>,
    page: Page,
    language_menu_open: bool,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    /// Cache of remotely fetched locale bundles.
    query: QueryClient<LocaleBundle>,
    /// Present when remote bundles are enabled and the origin is valid.
    locale_backend: Option<HttpBackend>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("location", &self.location.as_ref().map(Url::as_str))
            .field("language", &self.i18n.current_language())
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        let router = Router::default();
        let location = Url::parse(config::DEFAULT_ORIGIN).ok();
        let page = initial_page(&router, location.as_ref());
        Self {
            i18n: I18n::default(),
            router,
            location,
            page,
            language_menu_open: false,
            theme_mode: ThemeMode::default(),
            notifications: notifications::Manager::new(),
            query: QueryClient::default(),
            locale_backend: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn initial_page(router: &Router, location: Option<&Url>) -> Page {
    router.match_path(location.map_or("/", Url::path))
}

fn parse_location(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(error) => {
            warn!(url = raw, %error, "ignoring invalid location");
            None
        }
    }
}

impl App {
    /// Initializes application state from configuration, persisted state and
    /// launcher flags, and starts the remote locale fetch when enabled.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let (store, state_warning) = StateStore::open(None);
        let now = Instant::now();

        let location = flags
            .url
            .as_deref()
            .and_then(parse_location)
            .or_else(|| parse_location(&config.server.origin));

        let mut i18n = I18n::new(
            config.i18n.detection.clone(),
            config.i18n.fallback_language,
            Box::new(store),
        );
        let language = i18n.resolve(&DetectionContext::from_system(
            flags.lang.clone(),
            location.clone(),
        ));

        let locale_backend = if config.i18n.remote_bundles {
            location.as_ref().and_then(|location| {
                let origin = location.origin().ascii_serialization();
                match RequestResolver::new(&origin, &config.server.proxy) {
                    Ok(resolver) => Some(HttpBackend::new(
                        resolver,
                        config.i18n.load_path.clone(),
                        config.query,
                    )),
                    Err(error) => {
                        warn!(%error, "remote locale bundles disabled");
                        None
                    }
                }
            })
        } else {
            None
        };

        let router = Router::default();
        let page = initial_page(&router, location.as_ref());
        info!(%language, %page, "starting ChopExpress");

        let mut app = App {
            i18n,
            router,
            location,
            page,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::with_durations(config.notifications),
            query: QueryClient::new(config.query),
            locale_backend,
            ..Self::default()
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::error(key), now);
        }

        let task = match &app.locale_backend {
            Some(backend) => {
                app.i18n.set_load_state(LoadState::Loading);
                update::fetch_locale(backend, language)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr_or("app.name", "ChopExpress");
        let (key, fallback) = placeholder::title(self.page);
        format!("{} - {app_name}", self.i18n.tr_or(key, fallback))
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let focus_sub = subscription::create_focus_subscription(
            self.locale_backend.is_some() && self.query.defaults().refetch_on_window_focus,
        );

        Subscription::batch([tick_sub, focus_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        if let Message::Notification(notification_message) = &message {
            self.notifications.handle_message(notification_message, now);
            return Task::none();
        }

        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            router: &self.router,
            location: &mut self.location,
            page: &mut self.page,
            language_menu_open: &mut self.language_menu_open,
            notifications: &mut self.notifications,
            query: &mut self.query,
            backend: self.locale_backend.as_ref(),
            now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Navigate(page) => update::handle_navigate(&mut ctx, page),
            Message::NavigateToPath(path) => update::handle_navigate_to_path(&mut ctx, &path),
            Message::LocaleFetched { language, result } => {
                update::handle_locale_fetched(&mut ctx, language, result)
            }
            Message::WindowFocused => update::handle_window_focused(&mut ctx),
            Message::Notification(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: self.page,
            language_menu_open: self.language_menu_open,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::ui::navbar;
    use crate::ui::notifications::NotificationMessage;
    use std::time::Duration;

    #[test]
    fn default_app_starts_on_dashboard_in_french() {
        let app = App::default();
        assert_eq!(app.page, Page::Dashboard);
        assert_eq!(app.i18n.current_language(), Language::Fr);
        assert_eq!(app.title(), "Tableau de bord - ChopExpress");
    }

    #[test]
    fn navigate_message_changes_page_and_title() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Page::Menu));
        assert_eq!(app.page, Page::Menu);
        assert_eq!(app.title(), "Menu des Restaurants - ChopExpress");
    }

    #[test]
    fn unknown_path_renders_menu() {
        let mut app = App::default();
        let _ = app.update(Message::NavigateToPath("/unknown-path".into()));
        assert_eq!(app.page, Page::Menu);
    }

    #[test]
    fn language_selection_retitles_window() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(
            Language::En,
        )));
        assert_eq!(app.i18n.current_language(), Language::En);
        assert_eq!(app.title(), "Dashboard - ChopExpress");
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn tick_expires_toasts() {
        let mut app = App::default();
        let start = Instant::now();
        app.notifications.push(Notification::success("notifications.language_changed"), start);

        let _ = app.update(Message::Notification(NotificationMessage::Tick(
            start + Duration::from_secs(10),
        )));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn loading_state_selects_loading_view() {
        let mut app = App::default();
        assert_eq!(view::Body::for_state(app.i18n.load_state()), view::Body::Routed);

        app.i18n.set_load_state(LoadState::Loading);
        assert_eq!(view::Body::for_state(app.i18n.load_state()), view::Body::Loading);
        let _element = app.view();
    }

    #[test]
    fn failed_load_still_renders_routed_page() {
        let mut app = App::default();
        app.i18n
            .set_load_state(LoadState::Failed("503 Service Unavailable".into()));

        assert_eq!(view::Body::for_state(app.i18n.load_state()), view::Body::Routed);
        let _element = app.view();
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("minimum size set");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }

    #[test]
    fn invalid_location_is_ignored() {
        assert!(parse_location("not a url").is_none());
        assert!(parse_location("http://localhost:3000/menu").is_some());
    }
}
