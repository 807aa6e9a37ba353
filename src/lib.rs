//! Chart Buckets
//!
//! Groups timestamped events into labeled time buckets (hour of day,
//! day of week, date, week, month) so that several series can be charted
//! against one shared label axis.
//!
//! ## Getting Started
//!
//! ```ignore
//! use chart_buckets::aggregator::{aggregate, Granularity};
//!
//! let chart = aggregate(&series, Granularity::Week, &span);
//! for (label, value) in chart.labels.iter().zip(&chart.values[0]) {
//!     println!("{label}: {value}");
//! }
//! ```
//!
//! The `chart-buckets` CLI wraps the same functionality:
//!
//! ```bash
//! chart-buckets demo --output series.json
//! chart-buckets aggregate --input series.json --granularity week --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod demo;
pub mod output;
pub mod parser;
pub mod utils;
