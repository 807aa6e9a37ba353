//! Data model and JSON schema definitions.
//!
//! This module defines both the in-memory event/series types consumed by the
//! aggregator and the structure of JSON files we read and write.
//! Report schemas are versioned to allow future evolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Event {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A named, optionally colored collection of events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default)]
    pub events: Vec<Event>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Option<String>, events: Vec<Event>) -> Self {
        Self {
            name: name.into(),
            color,
            events,
        }
    }

    /// Sum of event values within `[span.from, span.to]`
    pub fn total_within(&self, span: &Span) -> f64 {
        self.events
            .iter()
            .filter(|e| span.contains(&e.timestamp))
            .map(|e| e.value)
            .sum()
    }
}

/// Inclusive time range bounding the label axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Span {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.from && *instant <= self.to
    }

    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}

/// Labels plus one value vector per series, aligned index-for-index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Top-level structure of a series input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFile {
    pub series: Vec<Series>,
}

/// Top-level chart report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Granularity the buckets were built at
    pub granularity: String,

    /// Weekday that begins week buckets
    pub week_start: String,

    /// Offset used as local time (e.g. "+09:00")
    pub utc_offset: String,

    /// Span the labels were walked over
    pub span: Span,

    /// Shared label axis
    pub labels: Vec<String>,

    /// One dataset per input series
    pub datasets: Vec<Dataset>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One series' bucket sums in a chart report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub data: Vec<f64>,

    /// Sum over all buckets
    pub total: f64,
}

/// One doughnut segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSlice {
    pub label: String,
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Percentage of the total of all slices
    pub percentage: f64,
}

/// Doughnut data written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoughnutReport {
    pub version: String,
    pub slices: Vec<ShareSlice>,
    pub generated_at: String,
}
