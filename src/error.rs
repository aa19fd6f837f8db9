// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Variants carry rendered messages rather than source errors so the type stays
//! `Clone` and can travel inside Iced messages.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Locale Error: {0}")]
    Locale(String),
    #[error("HTTP Error: {0}")]
    Http(String),
    #[error("Route Error: {0}")]
    Route(String),
    #[error("State Error: {0}")]
    State(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Locale(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("invalid url: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_maps_to_locale_variant() {
        let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        assert!(matches!(Error::from(parse), Error::Locale(_)));
    }

    #[test]
    fn url_error_maps_to_config_variant() {
        let parse = url::Url::parse("not a url").unwrap_err();
        match Error::from(parse) {
            Error::Config(message) => assert!(message.starts_with("invalid url")),
            other => panic!("expected Config variant, got {other:?}"),
        }
    }
}
