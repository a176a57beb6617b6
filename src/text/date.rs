//! Publication date rendering
//!
//! Turns an article timestamp into `Published on Jan 4th, 2018 at 3:04pm EST`,
//! converting to a named IANA timezone when one is given.

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Returned in place of a date when the timestamp cannot be parsed
pub const DATE_UNAVAILABLE: &str = "Publication date not available";

/// Naive layouts accepted after RFC 3339, interpreted as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an article timestamp into a UTC instant.
///
/// Accepts RFC 3339 (with `Z` or an explicit offset), naive date-times that
/// are taken to be UTC, and bare `YYYY-MM-DD` dates (midnight UTC).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render the publication line for `raw`, optionally in `timezone`.
///
/// Unparseable timestamps give [`DATE_UNAVAILABLE`]. An unknown timezone name
/// is logged and the date is rendered in UTC.
#[must_use]
pub fn format_date(raw: &str, timezone: Option<&str>) -> String {
    let Some(instant) = parse_timestamp(raw) else {
        return DATE_UNAVAILABLE.to_string();
    };

    match timezone.map(|name| (name, name.parse::<Tz>())) {
        Some((_, Ok(tz))) => published_on(&instant.with_timezone(&tz)),
        Some((name, Err(err))) => {
            warn!("Unknown timezone '{name}', rendering in UTC: {err}");
            published_on(&instant)
        }
        None => published_on(&instant),
    }
}

fn published_on<Z>(datetime: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let day = datetime.day();
    format!(
        "Published on {} {day}{}, {} at {}",
        datetime.format("%b"),
        ordinal_suffix(day),
        datetime.format("%Y"),
        datetime.format("%-I:%M%P %Z"),
    )
}

/// English ordinal suffix for a day of the month
const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
