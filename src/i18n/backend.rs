// SPDX-License-Identifier: MPL-2.0
//! Remote loading of locale bundles over HTTP.
//!
//! The load path is a template such as `/locales/{{lng}}.json`; it is resolved
//! through the request resolver so the dev proxy table applies.

use super::bundle::LocaleBundle;
use super::language::Language;
use crate::error::{Error, Result};
use crate::http::RequestResolver;
use crate::query::QueryDefaults;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default location of remote translation files.
pub const DEFAULT_LOAD_PATH: &str = "/locales/{{lng}}.json";

const LANGUAGE_PLACEHOLDER: &str = "{{lng}}";
const NAMESPACE_PLACEHOLDER: &str = "{{ns}}";

/// Fetches locale bundles from the application origin.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    resolver: RequestResolver,
    load_path: String,
    max_attempts: u32,
    retry_delay: fn(&QueryDefaults, u32) -> Duration,
    defaults: QueryDefaults,
}

impl HttpBackend {
    #[must_use]
    pub fn new(resolver: RequestResolver, load_path: impl Into<String>, defaults: QueryDefaults) -> Self {
        Self {
            client: reqwest::Client::new(),
            resolver,
            load_path: load_path.into(),
            max_attempts: defaults.max_attempts(),
            retry_delay: QueryDefaults::retry_delay,
            defaults,
        }
    }

    /// Retries immediately instead of backing off.
    #[must_use]
    pub fn without_backoff(mut self) -> Self {
        self.retry_delay = |_, _| Duration::ZERO;
        self
    }

    /// Cache key under which a language's bundle is stored.
    #[must_use]
    pub fn cache_key(language: Language) -> String {
        format!("locales/{}", language.code())
    }

    /// Request path for `language`.
    #[must_use]
    pub fn path_for(&self, language: Language) -> String {
        self.load_path
            .replace(LANGUAGE_PLACEHOLDER, language.code())
            .replace(NAMESPACE_PLACEHOLDER, super::bundle::DEFAULT_NAMESPACE)
    }

    /// Downloads and parses the bundle for `language`, retrying per the query
    /// defaults. Returns the last error once every attempt has failed.
    pub async fn fetch(self, language: Language) -> Result<LocaleBundle> {
        let url = self.resolver.resolve(&self.path_for(language))?;
        let mut last_error = Error::Http(format!("no attempt made for {url}"));

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                let delay = (self.retry_delay)(&self.defaults, attempt);
                debug!(%url, attempt, ?delay, "retrying locale fetch");
                tokio::time::sleep(delay).await;
            }

            match self.fetch_once(&url, language).await {
                Ok(bundle) => {
                    info!(%language, keys = bundle.key_count(), "fetched remote locale bundle");
                    return Ok(bundle);
                }
                Err(error) => {
                    warn!(%url, attempt = attempt + 1, max = self.max_attempts, %error, "locale fetch failed");
                    last_error = error;
                }
            }
        }

        Err(last_error)
    }

    async fn fetch_once(&self, url: &url::Url, language: Language) -> Result<LocaleBundle> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("{url} answered {status}")));
        }
        let body = response.text().await?;
        LocaleBundle::from_json(language, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(origin: &str) -> HttpBackend {
        let resolver = RequestResolver::new(origin, &[]).expect("resolver");
        HttpBackend::new(resolver, DEFAULT_LOAD_PATH, QueryDefaults::default()).without_backoff()
    }

    #[test]
    fn path_for_fills_placeholders() {
        let backend = backend("http://localhost:3000");
        assert_eq!(backend.path_for(Language::En), "/locales/en.json");
        assert_eq!(HttpBackend::cache_key(Language::Fr), "locales/fr");
    }

    #[tokio::test]
    async fn fetch_parses_remote_bundle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locales/en.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{ "menu": { "title": "Remote" } }"#),
            )
            .mount(&server)
            .await;

        let bundle = backend(&server.uri())
            .fetch(Language::En)
            .await
            .expect("fetch succeeds");
        assert_eq!(bundle.lookup("menu.title"), Some("Remote"));
    }

    #[tokio::test]
    async fn fetch_retries_once_then_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locales/fr.json"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let result = backend(&server.uri()).fetch(Language::Fr).await;
        assert!(matches!(result, Err(Error::Http(_))));
        server.verify().await;
    }

    #[tokio::test]
    async fn fetch_reports_invalid_json_as_locale_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locales/en.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = backend(&server.uri()).fetch(Language::En).await;
        assert!(matches!(result, Err(Error::Locale(_))));
    }
}
