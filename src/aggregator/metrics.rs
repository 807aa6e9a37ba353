//! Summary statistics over aggregated buckets and doughnut shares.
//!
//! Series statistics feed the text summary and the report totals; shares
//! turn a handful of raw values into doughnut slices with percentages.

use crate::parser::schema::ShareSlice;
use log::debug;

/// Calculate statistics for one aggregated series
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `labels` - Bucket labels of the aggregation
/// * `values` - One series' bucket sums, aligned with `labels`
///
/// # Returns
/// Totals, mean and the peak bucket (earliest one on ties)
pub fn calculate_series_stats(labels: &[String], values: &[f64]) -> SeriesStats {
    if values.is_empty() {
        return SeriesStats::default();
    }

    let total: f64 = values.iter().sum();
    let bucket_count = values.len();
    let non_empty_buckets = values.iter().filter(|v| **v != 0.0).count();

    let mut peak_index = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[peak_index] {
            peak_index = index;
        }
    }

    SeriesStats {
        total,
        bucket_count,
        non_empty_buckets,
        mean_per_bucket: total / bucket_count as f64,
        peak_label: labels.get(peak_index).cloned(),
        peak_value: values[peak_index],
    }
}

/// Statistics for one aggregated series
///
/// **Public** - returned from calculate_series_stats
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStats {
    /// Sum over all buckets
    pub total: f64,

    /// Number of buckets
    pub bucket_count: usize,

    /// Buckets with a non-zero sum
    pub non_empty_buckets: usize,

    /// Mean sum per bucket
    pub mean_per_bucket: f64,

    /// Label of the largest bucket
    pub peak_label: Option<String>,

    /// Value of the largest bucket
    pub peak_value: f64,
}

impl SeriesStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Buckets: {} ({} non-empty) | Mean: {:.2} | Peak: {} at {}",
            self.total,
            self.bucket_count,
            self.non_empty_buckets,
            self.mean_per_bucket,
            self.peak_value,
            self.peak_label.as_deref().unwrap_or("-")
        )
    }
}

/// Turn labeled values into doughnut slices
///
/// Percentages are relative to the sum of all values and are 0 when the sum is 0.
pub fn calculate_shares(entries: &[(String, f64, Option<String>)]) -> Vec<ShareSlice> {
    let total: f64 = entries.iter().map(|(_, value, _)| *value).sum();
    debug!("Calculating {} shares of total {}", entries.len(), total);

    entries
        .iter()
        .map(|(label, value, color)| ShareSlice {
            label: label.clone(),
            value: *value,
            color: color.clone(),
            percentage: if total > 0.0 {
                (value / total) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
