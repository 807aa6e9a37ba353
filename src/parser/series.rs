//! Series file parser.
//!
//! Parses raw JSON into validated event series ready for aggregation.
//! Accepts either `{"series": [...]}` or a bare array of series.

use super::schema::{Series, SeriesFile};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse series from a JSON value
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::JsonError` - Invalid JSON structure
/// * `ParseError::InvalidFormat` - Missing names or non-finite values
pub fn parse_series(raw: &serde_json::Value) -> Result<Vec<Series>, ParseError> {
    let series = match raw {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<Series>>(raw.clone())?,
        serde_json::Value::Object(obj) if obj.contains_key("series") => {
            serde_json::from_value::<SeriesFile>(raw.clone())?.series
        }
        _ => {
            return Err(ParseError::InvalidFormat(
                "expected an array of series or an object with a 'series' key".to_string(),
            ))
        }
    };

    validate_series(&series)?;

    debug!(
        "Parsed {} series ({} events)",
        series.len(),
        series.iter().map(|s| s.events.len()).sum::<usize>()
    );

    Ok(series)
}

/// Read and parse a series file from disk
pub fn read_series_file(path: impl AsRef<Path>) -> Result<Vec<Series>, ParseError> {
    let path = path.as_ref();
    debug!("Reading series from: {}", path.display());

    let file = File::open(path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_series(&raw)
}

/// Check names and values of parsed series
///
/// **Public** - can be run on series built in code
pub fn validate_series(series: &[Series]) -> Result<(), ParseError> {
    for (index, s) in series.iter().enumerate() {
        if s.name.trim().is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "series #{} has an empty name",
                index
            )));
        }

        if let Some(event) = s.events.iter().find(|e| !e.value.is_finite()) {
            return Err(ParseError::InvalidFormat(format!(
                "series '{}' has a non-finite value at {}",
                s.name, event.timestamp
            )));
        }

        if s.events.is_empty() {
            warn!("Series '{}' has no events", s.name);
        }
    }

    Ok(())
}
