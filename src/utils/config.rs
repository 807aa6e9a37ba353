//! Configuration and constants for the CLI.

use chrono::Weekday;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Default span of the demo data set (local wall-clock time)
pub const DEFAULT_SPAN_FROM: &str = "2021-11-01 00:00:00";
pub const DEFAULT_SPAN_TO: &str = "2021-12-31 23:59:59";

pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

// Synthetic line-chart series: (name, color, min events, max events)
pub const DEMO_SERIES: &[(&str, &str, usize, usize)] = &[
    ("Dataset 1", "#015cfa", 150, 300),
    ("Dataset 2", "#e53935", 10, 20),
];

// Doughnut demo data
pub const DOUGHNUT_COLORS: &[&str] = &["#1f78b4", "#a6cee3", "#b2df8a"];
pub const DOUGHNUT_MIN_SLICES: usize = 2;
pub const DOUGHNUT_VALUE_RANGE: (u32, u32) = (10, 100);

/// Default seed for the demo generator
pub const DEFAULT_SEED: u64 = 42;

// Environment variables consulted by the CLI
pub const ENV_UTC_OFFSET: &str = "CHART_BUCKETS_UTC_OFFSET";
pub const ENV_WEEK_START: &str = "CHART_BUCKETS_WEEK_START";
pub const ENV_LABELS: &str = "CHART_BUCKETS_LABELS";
