//! Grammar matchers for field values.
//!
//! Every matcher is an anchored, full-string match. Patterns are compiled once
//! on first use.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// ISO 8601 date or date-time, from a bare year up to fractional seconds with
/// an offset. Time components only match after a full date.
static ISO8601_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})(-([0-9]{1,2})(-([0-9]{1,2})((.)([0-9]{2}):([0-9]{2})(:([0-9]{2})(\.([0-9]+))?)?(Z|(([-+])([0-9]{2}):([0-9]{2})))?)?)?)?$",
    )
    .expect("Invalid ISO 8601 regex")
});

/// http, https, ftp or ftps URL with a domain name or IPv4 host, an optional
/// port and an optional path or query. Scheme, host and port are ASCII only.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?i-u:(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?)",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("Invalid URL regex")
});

/// Two letters, optionally followed by two more.
static LANGUAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}([A-Za-z]{2})?$").expect("Invalid language regex"));

/// Accepted `accrualPeriodicity` values. An absent or null value is accepted too.
pub const ACCRUAL_PERIODICITY_VALUES: &[&str] = &[
    "Annual",
    "Bimonthly",
    "Semiweekly",
    "Daily",
    "Biweekly",
    "Semiannual",
    "Biennial",
    "Triennial",
    "Three times a week",
    "Three times a month",
    "Continuously updated",
    "Monthly",
    "Quarterly",
    "Semimonthly",
    "Three times a year",
    "Weekly",
    "Completely irregular",
];

/// Returns true if `s` is an ISO 8601 date or date-time.
pub fn is_iso8601(s: &str) -> bool {
    ISO8601_REGEX.is_match(s)
}

/// Returns true if `s` looks like an http(s) or ftp(s) URL.
pub fn is_url(s: &str) -> bool {
    URL_REGEX.is_match(s)
}

/// Returns true if `s` is a two- or four-letter language code.
pub fn is_language_code(s: &str) -> bool {
    LANGUAGE_REGEX.is_match(s)
}

/// Returns true if the periodicity value is absent, null or one of
/// [`ACCRUAL_PERIODICITY_VALUES`].
pub fn periodicity_is_valid(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => ACCRUAL_PERIODICITY_VALUES.contains(&s.as_str()),
        Some(_) => false,
    }
}
