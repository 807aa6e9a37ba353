//! Seeded generator for demo series and doughnut values.

use crate::parser::schema::{Event, Series, Span};
use crate::utils::config::{DEMO_SERIES, DOUGHNUT_COLORS, DOUGHNUT_MIN_SLICES, DOUGHNUT_VALUE_RANGE};
use chrono::Duration;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate synthetic chart data
pub struct DemoGenerator {
    rng: StdRng,
}

impl DemoGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Events spread uniformly over `span`, each with value 1, sorted by time
    ///
    /// The event count is drawn from `min_events..=max_events`. An inverted
    /// span produces no events.
    pub fn generate_events(
        &mut self,
        span: &Span,
        min_events: usize,
        max_events: usize,
    ) -> Vec<Event> {
        if span.is_inverted() || min_events > max_events {
            return Vec::new();
        }

        let count = self.rng.gen_range(min_events..=max_events);
        let width_ms = (span.to - span.from).num_milliseconds();

        let mut events: Vec<Event> = (0..count)
            .map(|_| {
                let offset = self.rng.gen_range(0..=width_ms);
                Event::new(span.from + Duration::milliseconds(offset), 1.0)
            })
            .collect();

        events.sort_by_key(|e| e.timestamp);
        events
    }

    /// The standard pair of demo series over `span`
    pub fn generate_series(&mut self, span: &Span) -> Vec<Series> {
        DEMO_SERIES
            .iter()
            .map(|(name, color, min, max)| {
                let events = self.generate_events(span, *min, *max);
                debug!("Generated {} events for '{}'", events.len(), name);
                Series::new(*name, Some(color.to_string()), events)
            })
            .collect()
    }

    /// Two or three doughnut entries labeled `Data N`, largest first
    pub fn generate_doughnut(&mut self) -> Vec<(String, f64, Option<String>)> {
        let count = self.rng.gen_range(DOUGHNUT_MIN_SLICES..=DOUGHNUT_COLORS.len());
        let (low, high) = DOUGHNUT_VALUE_RANGE;

        let mut values: Vec<u32> = (0..count).map(|_| self.rng.gen_range(low..=high)).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                (
                    format!("Data {}", index + 1),
                    f64::from(value),
                    DOUGHNUT_COLORS.get(index).map(|c| c.to_string()),
                )
            })
            .collect()
    }
}
