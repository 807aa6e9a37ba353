//! Parsing of instants, UTC offsets and weekdays given on the command line.

use crate::utils::error::{AggregateError, ParseError};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc, Weekday,
};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse an instant
///
/// Accepts RFC 3339 (`2021-11-01T00:00:00+09:00`), or a wall-clock date or
/// date-time which is interpreted in `offset`.
pub fn parse_instant(input: &str, offset: &FixedOffset) -> Result<DateTime<Utc>, ParseError> {
    let input = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(input, f).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| ParseError::InvalidTimestamp(input.to_string()))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|t| t.with_timezone(&Utc))
        .ok_or_else(|| ParseError::InvalidTimestamp(input.to_string()))
}

/// Parse a UTC offset such as `+09:00`, `-0500`, `Z` or `UTC`
pub fn parse_utc_offset(input: &str) -> Result<FixedOffset, AggregateError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("z") || input.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    input
        .parse::<FixedOffset>()
        .map_err(|_| AggregateError::InvalidArgument(format!("invalid UTC offset '{}'", input)))
}

/// Parse a weekday name (`sun`, `Monday`, ...)
pub fn parse_weekday(input: &str) -> Result<Weekday, AggregateError> {
    input
        .trim()
        .parse::<Weekday>()
        .map_err(|_| AggregateError::InvalidArgument(format!("invalid weekday '{}'", input)))
}
