// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Month/day/year, 12-hour clock: `1/1/2021, 12:00:00 AM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Shown for timestamps that do not map to a representable instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a Unix-seconds timestamp for display in the server's local time zone.
pub fn format_unix_seconds(seconds: i64) -> String {
    format_unix_seconds_in(seconds, &Local)
}

/// Format a Unix-seconds timestamp for display in `tz`.
///
/// The value is scaled to milliseconds before conversion, so anything whose
/// millisecond value overflows is reported as [`INVALID_DATE`].
pub fn format_unix_seconds_in<Tz>(seconds: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    seconds
        .checked_mul(1000)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
