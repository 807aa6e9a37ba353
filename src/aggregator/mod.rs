//! Aggregation of timestamped events into chart buckets.
//!
//! This module transforms event series into:
//! - A shared label axis at the requested granularity
//! - Per-series bucket sums aligned with that axis
//! - Summary statistics and doughnut shares

pub mod buckets;
pub mod calendar;
pub mod granularity;
pub mod metrics;

// Re-export main types and functions
pub use buckets::{aggregate, aggregate_named, AggregateOptions, Aggregator};
pub use calendar::{CalendarExt, CalendarUnit};
pub use granularity::{week_number, BucketLayout, BucketRange, Granularity, LabelStyle};
pub use metrics::{calculate_series_stats, calculate_shares, SeriesStats};
