// SPDX-License-Identifier: MPL-2.0
//! Interpolation of `{{var}}` placeholders and `{{var, format}}` directives.
//!
//! Format names are a closed set; anything else passes the value through
//! untouched so templates never fail to render.

use super::language::Language;
use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;
use tracing::debug;

const PREFIX: &str = "{{";
const SUFFIX: &str = "}}";
const FORMAT_SEPARATOR: char = ',';

/// ISO 4217 code of the currency amounts are shown in.
pub const CURRENCY_CODE: &str = "XAF";

/// Symbol rendered next to amounts.
pub const CURRENCY_SYMBOL: &str = "FCFA";

/// Named value transforms usable inside a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Uppercase,
    Lowercase,
    Currency,
    Date,
}

impl FromStr for Format {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "uppercase" => Ok(Format::Uppercase),
            "lowercase" => Ok(Format::Lowercase),
            "currency" => Ok(Format::Currency),
            "date" => Ok(Format::Date),
            _ => Err(()),
        }
    }
}

impl Format {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Uppercase => "uppercase",
            Format::Lowercase => "lowercase",
            Format::Currency => "currency",
            Format::Date => "date",
        }
    }

    /// Applies the transform. Values that cannot be interpreted are returned as-is.
    #[must_use]
    pub fn apply(self, value: &str, language: Language) -> String {
        let formatted = match self {
            Format::Uppercase => Some(value.to_uppercase()),
            Format::Lowercase => Some(value.to_lowercase()),
            Format::Currency => format_currency(value, language),
            Format::Date => format_date(value, language),
        };
        formatted.unwrap_or_else(|| value.to_string())
    }
}

/// Renders an amount in XAF with no fraction digits.
///
/// French groups thousands with a space and puts the symbol last; English
/// groups with a comma and puts the symbol first.
fn format_currency(value: &str, language: Language) -> Option<String> {
    let amount: f64 = value.trim().parse().ok()?;
    if !amount.is_finite() {
        return None;
    }
    // f64::round rounds half away from zero.
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let formatted = match language {
        Language::Fr => format!("{} {CURRENCY_SYMBOL}", group_digits(&digits, ' ')),
        Language::En => format!("{CURRENCY_SYMBOL} {}", group_digits(&digits, ',')),
    };
    Some(if negative {
        format!("-{formatted}")
    } else {
        formatted
    })
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Renders a date as `DD/MM/YYYY`, the short form used in Cameroon for both
/// languages. Accepts RFC 3339, `YYYY-MM-DD`, or epoch milliseconds. A bare
/// four-digit year is kept as the year.
fn format_date(value: &str, language: Language) -> Option<String> {
    let value = value.trim();
    if value.len() == 4 && value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Some(value.to_string());
    }
    let date = if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        date
    } else if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        timestamp.with_timezone(&Utc).date_naive()
    } else if let Ok(millis) = value.parse::<i64>() {
        DateTime::<Utc>::from_timestamp_millis(millis)?.date_naive()
    } else {
        return None;
    };

    let pattern = match language {
        Language::Fr | Language::En => "%d/%m/%Y",
    };
    Some(date.format(pattern).to_string())
}

/// Replaces every placeholder in `template` with its value from `vars`.
///
/// Placeholders naming an unknown variable render as the empty string. An
/// unterminated `{{` is kept literally.
#[must_use]
pub fn interpolate(template: &str, vars: &[(&str, &str)], language: Language) -> String {
    if !template.contains(PREFIX) {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(PREFIX) {
        output.push_str(&rest[..start]);
        let after_prefix = &rest[start + PREFIX.len()..];
        let Some(end) = after_prefix.find(SUFFIX) else {
            output.push_str(&rest[start..]);
            return output;
        };

        let expression = &after_prefix[..end];
        output.push_str(&render_placeholder(expression, vars, language));
        rest = &after_prefix[end + SUFFIX.len()..];
    }

    output.push_str(rest);
    output
}

fn render_placeholder(expression: &str, vars: &[(&str, &str)], language: Language) -> String {
    let (name, format) = match expression.split_once(FORMAT_SEPARATOR) {
        Some((name, format)) => (name.trim(), Some(format.trim())),
        None => (expression.trim(), None),
    };

    let Some(value) = vars
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
    else {
        debug!(variable = name, "missing interpolation value");
        return String::new();
    };

    match format {
        Some(format_name) => match format_name.parse::<Format>() {
            Ok(format) => format.apply(value, language),
            Err(()) => value.to_string(),
        },
        None => value.to_string(),
    }
}
