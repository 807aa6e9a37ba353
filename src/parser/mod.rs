//! Series parsing and schema definitions.
//!
//! This module handles:
//! - The event/series data model
//! - Parsing and validating series JSON files
//! - Parsing instants, offsets and weekdays from user input
//! - Defining the output report schema

pub mod schema;
pub mod series;
pub mod time;

// Re-export main types
pub use schema::{
    Aggregation, ChartReport, Dataset, DoughnutReport, Event, Series, SeriesFile, ShareSlice, Span,
};
pub use series::{parse_series, read_series_file, validate_series};
pub use time::{parse_instant, parse_utc_offset, parse_weekday};
