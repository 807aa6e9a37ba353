//! Granularities and the bucket layout each one produces.
//!
//! A layout is either a fixed set of slots (hour of day, day of week) or a
//! contiguous run of time ranges walked over the span (date, week, month).
//! Both answer the same two questions: what are the labels, and which
//! bucket does a local timestamp fall into.

use super::calendar::{CalendarExt, CalendarUnit};
use crate::utils::error::AggregateError;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Bucketing unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Hour,
    DayOfWeek,
    Date,
    Week,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Hour,
        Granularity::DayOfWeek,
        Granularity::Date,
        Granularity::Week,
        Granularity::Month,
    ];

    /// Canonical textual name
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hour => "hour",
            Granularity::DayOfWeek => "day",
            Granularity::Date => "date",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(Granularity::Hour),
            "day" | "dayofweek" | "day-of-week" | "day_of_week" | "weekday" => {
                Ok(Granularity::DayOfWeek)
            }
            "date" => Ok(Granularity::Date),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            other => Err(AggregateError::InvalidArgument(format!(
                "unknown granularity '{}' (expected hour, day, date, week or month)",
                other
            ))),
        }
    }
}

/// Language used for weekday and week labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    #[default]
    English,
    Japanese,
}

impl LabelStyle {
    fn weekday_names(&self) -> &'static [&'static str; 7] {
        match self {
            LabelStyle::English => &WEEKDAYS_EN,
            LabelStyle::Japanese => &WEEKDAYS_JA,
        }
    }

    fn week_label(&self, start: &NaiveDateTime, number: u32) -> String {
        match self {
            LabelStyle::English => format!("{} week {}", start.format("%Y/%m"), number),
            LabelStyle::Japanese => format!("{} 第{}週", start.format("%Y/%m"), number),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(LabelStyle::English),
            "ja" | "jp" | "japanese" => Ok(LabelStyle::Japanese),
            other => Err(AggregateError::InvalidArgument(format!(
                "unknown label style '{}' (expected en or ja)",
                other
            ))),
        }
    }
}

/// One walked bucket, inclusive on both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRange {
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// How timestamps map to buckets for one granularity
#[derive(Debug, Clone)]
pub enum BucketLayout {
    Fixed {
        labels: Vec<String>,
        slot: fn(&NaiveDateTime) -> usize,
    },
    Ranges(Vec<BucketRange>),
}

impl BucketLayout {
    /// Build the layout for `granularity` over the local span `[from, to]`
    pub fn build(
        granularity: Granularity,
        from: NaiveDateTime,
        to: NaiveDateTime,
        week_start: Weekday,
        style: LabelStyle,
    ) -> Self {
        let layout = match granularity {
            Granularity::Hour => BucketLayout::Fixed {
                labels: (0..24).map(|h| h.to_string()).collect(),
                slot: |t| t.hour() as usize,
            },
            Granularity::DayOfWeek => BucketLayout::Fixed {
                labels: style.weekday_names().iter().map(|d| d.to_string()).collect(),
                slot: |t| t.weekday().num_days_from_sunday() as usize,
            },
            Granularity::Date => {
                BucketLayout::Ranges(walk_units(from, to, CalendarUnit::Day, "%Y/%m/%d"))
            }
            Granularity::Month => {
                BucketLayout::Ranges(walk_units(from, to, CalendarUnit::Month, "%Y/%m"))
            }
            Granularity::Week => BucketLayout::Ranges(walk_weeks(from, to, week_start, style)),
        };

        debug!("{} layout: {} buckets", granularity, layout.len());
        layout
    }

    pub fn len(&self) -> usize {
        match self {
            BucketLayout::Fixed { labels, .. } => labels.len(),
            BucketLayout::Ranges(ranges) => ranges.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn labels(&self) -> Vec<String> {
        match self {
            BucketLayout::Fixed { labels, .. } => labels.clone(),
            BucketLayout::Ranges(ranges) => ranges.iter().map(|r| r.label.clone()).collect(),
        }
    }

    /// Index of the bucket containing `t`, if any
    pub fn locate(&self, t: &NaiveDateTime) -> Option<usize> {
        match self {
            BucketLayout::Fixed { labels, slot } => {
                let index = slot(t);
                (index < labels.len()).then_some(index)
            }
            BucketLayout::Ranges(ranges) => {
                // Ranges are sorted and contiguous, so the first range not
                // ending before `t` is the only candidate.
                let index = ranges.partition_point(|r| r.end < *t);
                ranges
                    .get(index)
                    .filter(|r| r.start <= *t)
                    .map(|_| index)
            }
        }
    }
}

/// Walk whole days or months from `floor(from)` to `ceil(to)`
fn walk_units(
    from: NaiveDateTime,
    to: NaiveDateTime,
    unit: CalendarUnit,
    format: &str,
) -> Vec<BucketRange> {
    let mut ranges = Vec::new();
    if from > to {
        return ranges;
    }

    let Some(limit) = to.end_of(unit) else {
        warn!("Span end {} is out of calendar range, no buckets produced", to);
        return ranges;
    };

    let mut cursor = from.start_of(unit);
    while cursor < limit {
        let Some(end) = cursor.end_of(unit) else {
            warn!("Calendar overflow after {}, stopping walk", cursor);
            break;
        };

        ranges.push(BucketRange {
            label: cursor.format(format).to_string(),
            start: cursor,
            end,
        });

        match end.next_instant() {
            Some(next) => cursor = next.start_of(unit),
            None => break,
        }
    }

    ranges
}

/// Walk week buckets, clipping each one at the end of its month
fn walk_weeks(
    from: NaiveDateTime,
    to: NaiveDateTime,
    week_start: Weekday,
    style: LabelStyle,
) -> Vec<BucketRange> {
    let mut ranges = Vec::new();
    if from > to {
        return ranges;
    }

    let Some(limit) = to.end_of(CalendarUnit::Day) else {
        warn!("Span end {} is out of calendar range, no buckets produced", to);
        return ranges;
    };

    let mut cursor = from.start_of(CalendarUnit::Day);
    while cursor < limit {
        let Some(end) = week_bucket_end(&cursor, week_start) else {
            warn!("Calendar overflow after {}, stopping walk", cursor);
            break;
        };

        ranges.push(BucketRange {
            label: style.week_label(&cursor, week_number(&cursor, week_start)),
            start: cursor,
            end,
        });

        match end.next_instant() {
            Some(next) => cursor = next.start_of(CalendarUnit::Day),
            None => break,
        }
    }

    ranges
}

/// End of the week bucket starting at `start`: the earlier of week end and month end
fn week_bucket_end(start: &NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    let first = i64::from(week_start.num_days_from_sunday());
    let current = i64::from(start.weekday().num_days_from_sunday());
    let days_left = (first + 6 - current).rem_euclid(7) as u32;

    let week_end = start
        .add(days_left, CalendarUnit::Day)?
        .end_of(CalendarUnit::Day)?;
    let month_end = start.end_of(CalendarUnit::Month)?;

    Some(week_end.min(month_end))
}

/// Week number within the month for a bucket starting at `start`
///
/// A bucket that does not begin on the week-start day, or begins on the 1st,
/// is week 1. Otherwise the number is `ceil(day / 7) + 1`, which can skip a
/// value in months that begin on the week-start day.
pub fn week_number(start: &NaiveDateTime, week_start: Weekday) -> u32 {
    if start.weekday() != week_start || start.day() == 1 {
        1
    } else {
        start.day().div_ceil(7) + 1
    }
}
