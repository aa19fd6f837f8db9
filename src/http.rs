// SPDX-License-Identifier: MPL-2.0
//! Resolution of request paths to absolute URLs.
//!
//! Requests normally go to the application origin. During development, paths
//! under a proxied prefix (`/api`, `/webhook`) are forwarded to the backend
//! origin instead, mirroring the dev server proxy table.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

/// Forwards every path under `prefix` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
}

impl ProxyRule {
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
        }
    }

    /// Prefix match on a segment boundary: `/api` matches `/api` and `/api/x`
    /// but not `/apiary`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.trim_end_matches('/')) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }
}

/// Turns request paths into absolute URLs.
#[derive(Debug, Clone)]
pub struct RequestResolver {
    origin: Url,
    proxy: Vec<(ProxyRule, Url)>,
}

impl RequestResolver {
    /// Builds a resolver, validating the origin and every proxy target.
    pub fn new(origin: &str, rules: &[ProxyRule]) -> Result<Self> {
        let origin = Url::parse(origin)?;
        let proxy = rules
            .iter()
            .map(|rule| Ok((rule.clone(), Url::parse(&rule.target)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { origin, proxy })
    }

    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Resolves `path` against the first matching proxy target, or the origin.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let base = self
            .proxy
            .iter()
            .find(|(rule, _)| rule.matches(path))
            .map_or(&self.origin, |(_, target)| target);
        Ok(base.join(path)?)
    }
}
