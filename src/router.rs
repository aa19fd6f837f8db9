// SPDX-License-Identifier: MPL-2.0
//! Mapping of location paths to pages.
//!
//! The route table is an ordered list of patterns. Matching ignores ASCII case,
//! the query string, the fragment and any trailing slash. A single wildcard
//! route must close the table so every path resolves to a page.

use crate::error::{Error, Result};
use std::fmt;

/// Pages the shell can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Menu,
    Orders,
    Restaurants,
    Settings,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Menu,
        Page::Orders,
        Page::Restaurants,
        Page::Settings,
    ];

    /// Translation key of the page's navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Page::Dashboard => "nav.dashboard",
            Page::Menu => "nav.menu",
            Page::Orders => "nav.orders",
            Page::Restaurants => "nav.restaurants",
            Page::Settings => "nav.settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Dashboard => "dashboard",
            Page::Menu => "menu",
            Page::Orders => "orders",
            Page::Restaurants => "restaurants",
            Page::Settings => "settings",
        };
        f.write_str(name)
    }
}

/// Left-hand side of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A normalized absolute path such as `/orders`.
    Exact(String),
    /// Matches anything.
    Wildcard,
}

impl Pattern {
    /// Parses `*` as the wildcard and anything else as an exact path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "*" {
            Pattern::Wildcard
        } else {
            Pattern::Exact(normalize(raw))
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        match self {
            Pattern::Exact(path) => path == normalized,
            Pattern::Wildcard => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: Pattern,
    pub page: Page,
}

impl Route {
    pub fn new(pattern: &str, page: Page) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            page,
        }
    }
}

/// Ordered route table; the first matching route wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: vec![
                Route::new("/", Page::Dashboard),
                Route::new("/menu", Page::Menu),
                Route::new("/orders", Page::Orders),
                Route::new("/restaurants", Page::Restaurants),
                Route::new("/settings", Page::Settings),
                Route::new("*", Page::Menu),
            ],
        }
    }
}

impl Router {
    /// Builds a router after checking the table has exactly one wildcard, in
    /// last position.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let wildcards = routes
            .iter()
            .filter(|route| route.pattern == Pattern::Wildcard)
            .count();
        if wildcards != 1 {
            return Err(Error::Route(format!(
                "route table needs exactly one wildcard, found {wildcards}"
            )));
        }
        if routes.last().map(|route| &route.pattern) != Some(&Pattern::Wildcard) {
            return Err(Error::Route("wildcard route must come last".into()));
        }
        Ok(Self { routes })
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the page for `path`. Total: the wildcard catches everything.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Page {
        let normalized = normalize(path);
        self.routes
            .iter()
            .find(|route| route.pattern.matches(&normalized))
            .map_or(Page::Menu, |route| route.page)
    }

    /// Canonical path of `page`: its first exact route, or `/` when it is only
    /// reachable through the wildcard.
    #[must_use]
    pub fn path_for(&self, page: Page) -> &str {
        self.routes
            .iter()
            .find_map(|route| match &route.pattern {
                Pattern::Exact(path) if route.page == page => Some(path.as_str()),
                _ => None,
            })
            .unwrap_or("/")
    }
}

/// Lowercases, drops query and fragment, and trims trailing slashes.
fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(&trimmed.to_ascii_lowercase());
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_maps_known_paths() {
        let router = Router::default();
        assert_eq!(router.match_path("/"), Page::Dashboard);
        assert_eq!(router.match_path("/menu"), Page::Menu);
        assert_eq!(router.match_path("/orders"), Page::Orders);
        assert_eq!(router.match_path("/restaurants"), Page::Restaurants);
        assert_eq!(router.match_path("/settings"), Page::Settings);
    }

    #[test]
    fn unknown_paths_fall_back_to_menu() {
        let router = Router::default();
        assert_eq!(router.match_path("/unknown/path"), Page::Menu);
        assert_eq!(router.match_path("/menu/extra"), Page::Menu);
        assert_eq!(router.match_path("/orders/42"), Page::Menu);
    }

    #[test]
    fn matching_ignores_case_slash_query_and_fragment() {
        let router = Router::default();
        assert_eq!(router.match_path("/ORDERS"), Page::Orders);
        assert_eq!(router.match_path("/orders/"), Page::Orders);
        assert_eq!(router.match_path("/orders?status=open"), Page::Orders);
        assert_eq!(router.match_path("/settings#language"), Page::Settings);
        assert_eq!(router.match_path(""), Page::Dashboard);
        assert_eq!(router.match_path("/?tab=1"), Page::Dashboard);
    }

    #[test]
    fn path_for_round_trips() {
        let router = Router::default();
        for page in Page::ALL {
            assert_eq!(router.match_path(router.path_for(page)), page);
        }
        assert_eq!(router.path_for(Page::Dashboard), "/");
        assert_eq!(router.path_for(Page::Orders), "/orders");
    }

    #[test]
    fn table_without_wildcard_is_rejected() {
        let result = Router::new(vec![Route::new("/", Page::Dashboard)]);
        assert!(matches!(result, Err(Error::Route(_))));
    }

    #[test]
    fn wildcard_must_be_last_and_unique() {
        let misplaced = Router::new(vec![
            Route::new("*", Page::Menu),
            Route::new("/", Page::Dashboard),
        ]);
        assert!(misplaced.is_err());

        let duplicated = Router::new(vec![
            Route::new("*", Page::Menu),
            Route::new("*", Page::Dashboard),
        ]);
        assert!(duplicated.is_err());
    }

    #[test]
    fn custom_table_first_match_wins() {
        let router = Router::new(vec![
            Route::new("/Carte/", Page::Menu),
            Route::new("/carte", Page::Orders),
            Route::new("*", Page::Dashboard),
        ])
        .expect("valid table");
        assert_eq!(router.match_path("/carte"), Page::Menu);
        assert_eq!(router.match_path("/nowhere"), Page::Dashboard);
        assert_eq!(router.path_for(Page::Settings), "/");
    }
}
