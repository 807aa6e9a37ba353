use chart_buckets::aggregator::{aggregate, AggregateOptions, Aggregator, Granularity, LabelStyle};
use chart_buckets::demo::DemoGenerator;
use chart_buckets::parser::parse_series;
use chart_buckets::parser::schema::{Event, Series, Span};
use chrono::{DateTime, FixedOffset, TimeZone, Utc, Weekday};
use pretty_assertions::assert_eq;
use serde_json::json;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn demo_span() -> Span {
    Span::new(at(2021, 11, 1, 0, 0, 0), at(2021, 12, 31, 23, 59, 59))
}

fn demo_series(seed: u64) -> Vec<Series> {
    DemoGenerator::new(seed).generate_series(&demo_span())
}

#[test]
fn test_hour_scenario() {
    let series = vec![Series::new(
        "hours",
        None,
        vec![
            Event::new(at(2021, 12, 1, 5, 0, 0), 1.0),
            Event::new(at(2021, 12, 1, 23, 0, 0), 2.0),
        ],
    )];

    let result = aggregate(&series, Granularity::Hour, &demo_span());

    let expected_labels: Vec<String> = (0..24).map(|h| h.to_string()).collect();
    assert_eq!(result.labels, expected_labels);

    let mut expected = vec![0.0; 24];
    expected[5] = 1.0;
    expected[23] = 2.0;
    assert_eq!(result.values[0], expected);
}

#[test]
fn test_fixed_granularities_have_fixed_cardinality() {
    let series = demo_series(1);
    let narrow = Span::new(at(2021, 11, 3, 0, 0, 0), at(2021, 11, 3, 1, 0, 0));

    for span in [demo_span(), narrow] {
        assert_eq!(aggregate(&series, Granularity::Hour, &span).labels.len(), 24);
        assert_eq!(aggregate(&series, Granularity::DayOfWeek, &span).labels.len(), 7);
    }
}

#[test]
fn test_day_of_week_labels() {
    let result = aggregate(&[], Granularity::DayOfWeek, &demo_span());
    assert_eq!(
        result.labels,
        vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    );
}

#[test]
fn test_values_aligned_with_labels() {
    let series = demo_series(2);

    for granularity in Granularity::ALL {
        let result = aggregate(&series, granularity, &demo_span());
        assert_eq!(result.values.len(), series.len());
        for values in &result.values {
            assert_eq!(values.len(), result.labels.len(), "granularity {}", granularity);
        }
    }
}

#[test]
fn test_sum_invariant() {
    let series = demo_series(3);
    let window = Span::new(at(2021, 11, 10, 12, 0, 0), at(2021, 12, 20, 6, 30, 0));

    for granularity in Granularity::ALL {
        let result = aggregate(&series, granularity, &window);
        for (s, values) in series.iter().zip(&result.values) {
            let bucketed: f64 = values.iter().sum();
            assert_eq!(bucketed, s.total_within(&window), "granularity {}", granularity);
        }
    }
}

#[test]
fn test_shared_label_axis() {
    let series = demo_series(4);

    for granularity in Granularity::ALL {
        let both = aggregate(&series, granularity, &demo_span());
        let first = aggregate(&series[..1], granularity, &demo_span());
        let second = aggregate(&series[1..], granularity, &demo_span());

        assert_eq!(first.labels, both.labels);
        assert_eq!(second.labels, both.labels);
        assert_eq!(first.values[0], both.values[0]);
        assert_eq!(second.values[0], both.values[1]);
    }
}

#[test]
fn test_idempotent() {
    let series = demo_series(5);
    let aggregator = Aggregator::new(
        AggregateOptions::new()
            .with_week_start(Weekday::Mon)
            .with_label_style(LabelStyle::Japanese),
    );

    for granularity in Granularity::ALL {
        let a = aggregator.aggregate(&series, granularity, &demo_span());
        let b = aggregator.aggregate(&series, granularity, &demo_span());
        assert_eq!(a, b);
    }
}

#[test]
fn test_boundary_events_counted_once() {
    let span = Span::new(at(2021, 11, 1, 0, 0, 0), at(2021, 11, 30, 23, 59, 59));
    let series = vec![Series::new(
        "edges",
        None,
        vec![Event::new(span.from, 1.0), Event::new(span.to, 10.0)],
    )];

    for granularity in Granularity::ALL {
        let result = aggregate(&series, granularity, &span);
        let total: f64 = result.values[0].iter().sum();
        assert_eq!(total, 11.0, "granularity {}", granularity);
    }
}

#[test]
fn test_leap_second_counted_for_every_granularity() {
    let raw = json!([{
        "name": "leap",
        "events": [{ "timestamp": "2016-12-31T23:59:60Z", "value": 1.0 }]
    }]);
    let series = parse_series(&raw).unwrap();
    let span = Span::new(at(2016, 12, 1, 0, 0, 0), at(2017, 1, 31, 0, 0, 0));
    assert_eq!(series[0].total_within(&span), 1.0);

    for granularity in Granularity::ALL {
        let result = aggregate(&series, granularity, &span);
        let total: f64 = result.values[0].iter().sum();
        assert_eq!(total, 1.0, "granularity {}", granularity);
    }
}

#[test]
fn test_far_future_event_does_not_break_offset_aggregation() {
    let raw = json!({ "series": [{
        "name": "far",
        "events": [
            { "timestamp": "+262142-12-31T23:59:59Z", "value": 1.0 },
            { "timestamp": "2021-11-15T03:00:00Z", "value": 2.0 }
        ]
    }]});
    let series = parse_series(&raw).unwrap();
    let aggregator = Aggregator::new(
        AggregateOptions::new().with_utc_offset(FixedOffset::east_opt(9 * 3600).unwrap()),
    );

    let result = aggregator.aggregate(&series, Granularity::Hour, &demo_span());

    assert_eq!(result.values[0][12], 2.0);
    assert_eq!(result.values[0].iter().sum::<f64>(), 2.0);
}

#[test]
fn test_week_scenario_november() {
    let span = Span::new(at(2021, 11, 1, 0, 0, 0), at(2021, 11, 30, 0, 0, 0));
    let result = aggregate(&[], Granularity::Week, &span);

    assert_eq!(
        result.labels,
        vec![
            "2021/11 week 1",
            "2021/11 week 2",
            "2021/11 week 3",
            "2021/11 week 4",
            "2021/11 week 5",
        ]
    );
    assert!(result.labels.iter().all(|l| l.starts_with("2021/11")));
}

#[test]
fn test_week_buckets_split_at_month_end() {
    // A Dec 31 event lands in December's last bucket, a Jan 1 event in January's first
    let span = Span::new(at(2021, 12, 26, 0, 0, 0), at(2022, 1, 8, 0, 0, 0));
    let series = vec![Series::new(
        "newyear",
        None,
        vec![
            Event::new(at(2021, 12, 31, 23, 59, 59), 1.0),
            Event::new(at(2022, 1, 1, 0, 0, 0), 2.0),
        ],
    )];

    let result = aggregate(&series, Granularity::Week, &span);

    assert_eq!(
        result.labels,
        vec!["2021/12 week 5", "2022/01 week 1", "2022/01 week 2"]
    );
    assert_eq!(result.values[0], vec![1.0, 2.0, 0.0]);
}

#[test]
fn test_date_buckets_contiguous_with_empty_days() {
    let span = Span::new(at(2021, 11, 28, 0, 0, 0), at(2021, 12, 2, 12, 0, 0));
    let series = vec![Series::new(
        "sparse",
        None,
        vec![Event::new(at(2021, 12, 1, 8, 0, 0), 3.0)],
    )];

    let result = aggregate(&series, Granularity::Date, &span);

    assert_eq!(
        result.labels,
        vec!["2021/11/28", "2021/11/29", "2021/11/30", "2021/12/01", "2021/12/02"]
    );
    assert_eq!(result.values[0], vec![0.0, 0.0, 0.0, 3.0, 0.0]);
}

#[test]
fn test_month_buckets_over_demo_span() {
    let series = demo_series(6);
    let result = aggregate(&series, Granularity::Month, &demo_span());

    assert_eq!(result.labels, vec!["2021/11", "2021/12"]);
    for (s, values) in series.iter().zip(&result.values) {
        assert_eq!(values.iter().sum::<f64>(), s.events.len() as f64);
    }
}

#[test]
fn test_empty_series_list() {
    for granularity in Granularity::ALL {
        let result = aggregate(&[], granularity, &demo_span());
        assert!(result.values.is_empty());
        assert!(!result.labels.is_empty());
    }
}

#[test]
fn test_inverted_span_is_empty_for_walked_granularities() {
    let inverted = Span::new(demo_span().to, demo_span().from);
    let series = demo_series(7);

    for granularity in [Granularity::Date, Granularity::Week, Granularity::Month] {
        let result = aggregate(&series, granularity, &inverted);
        assert!(result.labels.is_empty());
        assert!(result.values.iter().all(|v| v.is_empty()));
    }
}

#[test]
fn test_unknown_granularity_fails_fast() {
    assert!("quarter".parse::<Granularity>().is_err());
}
