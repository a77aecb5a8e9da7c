//! Display formatting for backend timestamps
//!
//! Every timestamp shown to users is shifted forward by a fixed two hours
//! before formatting. This is a business rule of the portal's display
//! timezone, applied as plain arithmetic with no timezone database, so it
//! behaves the same across DST changes and month or year boundaries.
//!
//! Inputs without an explicit offset are read as UTC. Inputs carrying an
//! offset (`Z`, `+05:00`, ...) are converted to UTC first.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;
use tracing::warn;

/// Hours added to every timestamp before it is displayed
pub const DISPLAY_OFFSET_HOURS: i64 = 2;

/// Output layout, e.g. `03/25/2024, 12:30 PM`
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y, %-I:%M %p";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatDateError {
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),
    /// The value parsed but adding the display offset leaves chrono's range
    #[error("Date out of display range: '{0}'")]
    OutOfRange(String),
}

/// Anything `format_date` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Instant(DateTime<Utc>),
    Naive(NaiveDateTime),
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<&DateTime<Utc>> for DateInput<'_> {
    fn from(value: &DateTime<Utc>) -> Self {
        DateInput::Instant(*value)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Naive(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Naive(value.and_time(NaiveTime::MIN))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

/// Format a timestamp for display
///
/// # Arguments
/// * `input` - A UTC instant, a naive date or date-time, or a date string
///   (RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.fff]]`, `YYYY-MM-DD HH:MM[:SS]` or
///   `YYYY-MM-DD`)
///
/// # Returns
/// The input plus [`DISPLAY_OFFSET_HOURS`], laid out as [`DISPLAY_FORMAT`],
/// `FormatDateError::InvalidDate` when a string cannot be parsed, or
/// `FormatDateError::OutOfRange` when the shifted value cannot be represented
///
/// # Examples
/// ```
/// use projectboard::dates::format_date;
/// assert_eq!(format_date("2024-03-25T10:30:00").unwrap(), "03/25/2024, 12:30 PM");
/// assert!(format_date("invalid-date").is_err());
/// ```
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> Result<String, FormatDateError> {
    let utc = match input.into() {
        DateInput::Instant(instant) => instant.naive_utc(),
        DateInput::Naive(naive) => naive,
        DateInput::Text(text) => parse_date_text(text)?,
    };
    format_naive(utc).ok_or_else(|| FormatDateError::OutOfRange(utc.to_string()))
}

/// Format an already-parsed instant; cannot fail
///
/// An instant too close to chrono's upper bound to take the display offset
/// is shown as RFC 3339 text without the offset.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    format_naive(instant.naive_utc()).unwrap_or_else(|| {
        warn!(%instant, "timestamp out of display range, showing it unshifted");
        instant.to_rfc3339()
    })
}

fn format_naive(utc: NaiveDateTime) -> Option<String> {
    let shifted = utc.checked_add_signed(Duration::hours(DISPLAY_OFFSET_HOURS))?;
    Some(shifted.format(DISPLAY_FORMAT).to_string())
}

/// Parse a backend date string into a UTC wall-clock value
pub fn parse_date_text(text: &str) -> Result<NaiveDateTime, FormatDateError> {
    let trimmed = text.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_utc());
    }

    for layout in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(naive);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| FormatDateError::InvalidDate(text.to_string()))
}
