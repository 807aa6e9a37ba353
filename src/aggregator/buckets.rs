//! Aggregate series of timestamped events into labeled time buckets.
//!
//! All series in one call share a single label axis, so `values[i][j]` is the
//! sum for series `i` in bucket `labels[j]` and the per-series vectors line up
//! for charting.

use super::granularity::{BucketLayout, Granularity, LabelStyle};
use crate::parser::schema::{Aggregation, Series, Span};
use crate::utils::config::DEFAULT_WEEK_START;
use crate::utils::error::AggregateError;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Offset, Timelike, Utc, Weekday};
use log::{debug, warn};

/// Options shared by every aggregation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Weekday that begins a week bucket
    pub week_start: Weekday,

    /// Language of weekday and week labels
    pub label_style: LabelStyle,

    /// Offset defining "local" hours, days and months
    pub utc_offset: FixedOffset,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            week_start: DEFAULT_WEEK_START,
            label_style: LabelStyle::English,
            utc_offset: utc(),
        }
    }
}

impl AggregateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_label_style(mut self, label_style: LabelStyle) -> Self {
        self.label_style = label_style;
        self
    }

    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }
}

/// Stateless aggregator configured with [`AggregateOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    options: AggregateOptions,
}

impl Aggregator {
    pub fn new(options: AggregateOptions) -> Self {
        Self { options }
    }

    /// Bucket every series over `span` at `granularity`
    ///
    /// Events outside `[span.from, span.to]` are dropped; boundaries are
    /// inclusive. An inverted span yields no walked buckets, while hour and
    /// day-of-week keep their fixed labels with zero values. A span that
    /// cannot be expressed in local time is treated the same way.
    pub fn aggregate(
        &self,
        series: &[Series],
        granularity: Granularity,
        span: &Span,
    ) -> Aggregation {
        let (from, to) = self.local_span(span).unwrap_or_else(|| {
            warn!(
                "Span {} .. {} is out of local calendar range at {}, no events bucketed",
                span.from, span.to, self.options.utc_offset
            );
            (NaiveDateTime::MAX, NaiveDateTime::MIN)
        });

        let layout = BucketLayout::build(
            granularity,
            from,
            to,
            self.options.week_start,
            self.options.label_style,
        );

        let values = series
            .iter()
            .map(|s| self.fill(s, &layout, span, from <= to))
            .collect();

        Aggregation {
            labels: layout.labels(),
            values,
        }
    }

    /// Span bounds in local time, `None` if either end overflows
    pub fn local_span(&self, span: &Span) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.local(&span.from)?, self.local(&span.to)?))
    }

    /// Sum one series into the buckets of `layout`
    fn fill(
        &self,
        series: &Series,
        layout: &BucketLayout,
        span: &Span,
        active: bool,
    ) -> Vec<f64> {
        let mut sums = vec![0.0; layout.len()];
        let mut skipped = 0usize;

        for event in &series.events {
            if !active || !span.contains(&event.timestamp) {
                skipped += 1;
                continue;
            }

            match self.local(&event.timestamp).and_then(|t| layout.locate(&t)) {
                Some(index) => sums[index] += event.value,
                None => skipped += 1,
            }
        }

        debug!(
            "Series '{}': {} events bucketed, {} outside span",
            series.name,
            series.events.len() - skipped,
            skipped
        );

        sums
    }

    /// Wall-clock time at the configured offset
    ///
    /// Leap-second nanoseconds are clamped so the result sorts inside its second.
    fn local(&self, instant: &DateTime<Utc>) -> Option<NaiveDateTime> {
        let offset = Duration::seconds(i64::from(self.options.utc_offset.local_minus_utc()));
        let t = instant.naive_utc().checked_add_signed(offset)?;
        t.with_nanosecond(t.nanosecond().min(999_999_999))
    }
}

/// Aggregate with default options (Sunday week start, English labels, UTC)
///
/// **Public** - main entry point for bucketing
///
/// # Example
/// ```ignore
/// let chart = aggregate(&series, Granularity::Week, &span);
/// assert_eq!(chart.values[0].len(), chart.labels.len());
/// ```
pub fn aggregate(series: &[Series], granularity: Granularity, span: &Span) -> Aggregation {
    Aggregator::default().aggregate(series, granularity, span)
}

/// Parse a granularity name and aggregate, failing fast on unknown names
pub fn aggregate_named(
    series: &[Series],
    granularity: &str,
    span: &Span,
) -> Result<Aggregation, AggregateError> {
    let granularity = granularity.parse::<Granularity>()?;
    Ok(aggregate(series, granularity, span))
}

fn utc() -> FixedOffset {
    Utc.fix()
}
