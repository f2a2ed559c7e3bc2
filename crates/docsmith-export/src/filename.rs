//! Download filename policy.
//!
//! `{slug(title)}-{YYYY-MM-DD}.{ext}`. There is no collision handling: the
//! same title exported twice on the same day gets the same name.

use docsmith_core::models::document::{ExportFormat, effective_title};

/// Lowercase `title` and replace each whitespace run with a single `-`.
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn suggested_filename(title: &str, date: jiff::civil::Date, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        slug(effective_title(title)),
        date,
        format.extension()
    )
}

/// Today's date in UTC.
pub fn today() -> jiff::civil::Date {
    utc_date(jiff::Timestamp::now())
}

/// The UTC calendar date of `ts`, regardless of the local time zone.
pub fn utc_date(ts: jiff::Timestamp) -> jiff::civil::Date {
    ts.to_zoned(jiff::tz::TimeZone::UTC).date()
}
