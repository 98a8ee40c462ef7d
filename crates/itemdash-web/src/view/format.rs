//! Display formatting for item fields.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

use crate::client::CreatedAt;

/// e.g. `Oct 19, 2026, 03:05 PM`
const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

const INVALID_DATE: &str = "Invalid Date";

impl CreatedAt {
    /// The instant this value denotes, if it can be read as one.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            // A zero seconds field does not count as a wrapper.
            Self::Seconds { seconds: 0, .. } => None,
            Self::Seconds {
                seconds,
                nanoseconds,
            } => Utc.timestamp_opt(*seconds, *nanoseconds).single(),
            Self::Millis(ms) if ms.is_finite() => Utc.timestamp_millis_opt(*ms as i64).single(),
            Self::Millis(_) => None,
            Self::Text(s) => parse_date_text(s),
        }
    }
}

fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local.from_local_datetime(&dt).earliest().map(|d| d.with_timezone(&Utc));
    }
    // A bare date is midnight UTC.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Format a creation time in the server's local time zone.
pub fn format_created_at(value: Option<&CreatedAt>) -> String {
    format_created_at_in(value, &Local)
}

/// Format a creation time in `tz`.
///
/// Missing, empty and zero-millisecond values give an empty string.
pub fn format_created_at_in<Tz>(value: Option<&CreatedAt>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let value = match value {
        None => return String::new(),
        Some(CreatedAt::Text(s)) if s.is_empty() => return String::new(),
        Some(CreatedAt::Millis(ms)) if *ms == 0.0 || ms.is_nan() => return String::new(),
        Some(v) => v,
    };
    match value.to_datetime() {
        Some(dt) => dt.with_timezone(tz).format(DATE_TIME_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Visual treatment of a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Completed,
    InProgress,
    Pending,
    Neutral,
}

impl StatusTone {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("completed") => Self::Completed,
            Some("in-progress") => Self::InProgress,
            Some("pending") => Self::Pending,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Completed => "status-completed",
            Self::InProgress => "status-in-progress",
            Self::Pending => "status-pending",
            Self::Neutral => "status-default",
        }
    }
}
