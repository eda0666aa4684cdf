//! Timestamp helpers: the tracker stores milliseconds since epoch (UTC),
//! everything shown to the user is in local time.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Local date/time text for a stored timestamp. Out-of-range values are
/// printed as the raw number.
pub fn format_millis(ms: i64, fmt: &str) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.with_timezone(&Local).format(fmt).to_string(),
        None => ms.to_string(),
    }
}

/// Parse a user supplied point in time into milliseconds since epoch.
///
/// Accepted forms:
/// - raw milliseconds (`1735689600000`)
/// - RFC 3339 (`2025-01-01T08:00:00+01:00`)
/// - local `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`
/// - local `YYYY-MM-DD` (midnight)
pub fn parse_timestamp(s: &str) -> AppResult<i64> {
    let s = s.trim();

    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        return s
            .parse::<i64>()
            .map_err(|_| AppError::InvalidTimestamp(s.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }

    const LOCAL_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// `--at` handling shared by the commands: explicit value or the system clock.
pub fn resolve_now(at: Option<&str>) -> AppResult<i64> {
    match at {
        Some(s) => parse_timestamp(s),
        None => Ok(now_millis()),
    }
}
