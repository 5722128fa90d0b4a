//! Normalization of stored date/time values.
//!
//! Event start instants have been persisted in several shapes over the life
//! of the data set: canonical `YYYY-MM-DD HH:MM:SS` text, ISO strings with a
//! `T` separator, minute-precision strings and bare dates. Readers go through
//! [`parse_stored_instant`] so that a row in any of these shapes still
//! resolves to a calendar date, and a row in none of them degrades to `None`
//! instead of failing the whole query.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::types::TypeConstraintError;

/// Date-time formats attempted, in order, when normalizing stored text.
const STORED_INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Format used when persisting canonical start instants.
pub const CANONICAL_INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Attempt to normalize a stored start value into an instant.
///
/// Returns `None` when no known format matches. Callers treat `None` as
/// "unparseable, drop from day-bucketed output" rather than an error.
pub fn parse_stored_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in STORED_INSTANT_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(value, format) {
            return Some(instant);
        }
    }
    // Bare dates resolve to midnight.
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Build a canonical start instant from a `YYYY-MM-DD` date and an optional
/// `HH:MM` time-of-day.
///
/// A missing or malformed time degrades to midnight; a malformed date is
/// fatal. Legacy clients sent free-form time strings, so the asymmetry is
/// deliberate and load-bearing.
pub fn build_start_instant(
    date: &str,
    time: Option<&str>,
) -> Result<NaiveDateTime, TypeConstraintError> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| TypeConstraintError::InvalidDate(date.to_string()))?;

    let time = time
        .and_then(|t| NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok())
        .unwrap_or(NaiveTime::MIN);

    Ok(date.and_time(time))
}

/// Canonical text rendering of an instant for persistence.
pub fn format_stored_instant(instant: NaiveDateTime) -> String {
    instant.format(CANONICAL_INSTANT_FORMAT).to_string()
}

/// `HH:MM` display rendering of an instant's time-of-day.
pub fn format_time_of_day(instant: NaiveDateTime) -> String {
    instant.format(TIME_FORMAT).to_string()
}

/// Whether a client-supplied time-of-day string is a well-formed `HH:MM`
/// value worth caching on the event.
pub fn is_valid_time_of_day(value: &str) -> bool {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).is_ok()
}

/// Parse a `YYYY-MM-DD` request parameter.
pub fn parse_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| TypeConstraintError::InvalidDate(value.to_string()))
}
