//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Reads series from a JSON file
//! 2. Buckets them at the requested granularity
//! 3. Calculates per-series statistics
//! 4. Writes the chart report

use crate::aggregator::{calculate_series_stats, AggregateOptions, Aggregator, Granularity};
use crate::output::{generate_text_summary, validate_path, write_report};
use crate::parser::schema::{Aggregation, ChartReport, Dataset, Series, Span};
use crate::parser::read_series_file;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Series JSON file
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// Bucketing unit
    pub granularity: Granularity,

    /// Span bounding the label axis
    pub span: Span,

    /// Week start, label language and local offset
    pub options: AggregateOptions,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Maximum rows in the text summary (0 = all)
    pub summary_rows: usize,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            input: PathBuf::from("series.json"),
            output: PathBuf::from("report.json"),
            granularity: Granularity::Date,
            span: Span::new(now, now),
            options: AggregateOptions::default(),
            print_summary: false,
            summary_rows: 0,
        }
    }
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Series file missing or malformed
/// * Report write errors
pub fn execute_aggregate(args: AggregateArgs) -> Result<ChartReport> {
    let start_time = Instant::now();

    info!(
        "Aggregating {} at '{}' granularity",
        args.input.display(),
        args.granularity
    );

    // Step 1: Read series
    info!("Step 1/4: Reading series...");
    let series = read_series_file(&args.input)
        .with_context(|| format!("Failed to read series from {}", args.input.display()))?;

    // Step 2: Bucket
    info!("Step 2/4: Bucketing events...");
    let aggregator = Aggregator::new(args.options);
    let aggregation = aggregator.aggregate(&series, args.granularity, &args.span);

    debug!(
        "Built {} buckets for {} series",
        aggregation.labels.len(),
        aggregation.values.len()
    );

    // Step 3: Statistics
    info!("Step 3/4: Calculating statistics...");
    let report = build_report(&args, &series, aggregation);
    let stats: Vec<_> = report
        .datasets
        .iter()
        .map(|d| calculate_series_stats(&report.labels, &d.data))
        .collect();

    for (dataset, stat) in report.datasets.iter().zip(&stats) {
        info!("{}: {}", dataset.label, stat.summary());
    }

    // Step 4: Write report
    info!("Step 4/4: Writing report...");
    write_report(&report, &args.output).context("Failed to write chart report")?;

    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CHART SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:       {}", args.input.display());
        println!("Span:        {} .. {}", report.span.from, report.span.to);
        println!("Week start:  {}", report.week_start);
        println!("\n{}", generate_text_summary(&report, &stats, args.summary_rows));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Assemble a chart report from an aggregation
///
/// **Public** - usable without touching the filesystem
pub fn build_report(
    args: &AggregateArgs,
    series: &[Series],
    aggregation: Aggregation,
) -> ChartReport {
    let datasets = series
        .iter()
        .zip(aggregation.values)
        .map(|(s, data)| Dataset {
            label: s.name.clone(),
            color: s.color.clone(),
            total: data.iter().sum(),
            data,
        })
        .collect();

    ChartReport {
        version: SCHEMA_VERSION.to_string(),
        granularity: args.granularity.to_string(),
        week_start: args.options.week_start.to_string(),
        utc_offset: args.options.utc_offset.to_string(),
        span: args.span,
        labels: aggregation.labels,
        datasets,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    validate_path(&args.output).context("Invalid output path")?;

    if args.input == args.output {
        anyhow::bail!("Output path must differ from the input path");
    }

    if Aggregator::new(args.options).local_span(&args.span).is_none() {
        anyhow::bail!(
            "Span {} .. {} cannot be represented at offset {}",
            args.span.from,
            args.span.to,
            args.options.utc_offset
        );
    }

    if args.span.is_inverted() {
        info!(
            "Span is inverted ({} > {}), walked granularities will be empty",
            args.span.from, args.span.to
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::NamedTempFile;

    fn input_file() -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"series": []}"#).unwrap();
        file
    }

    #[test]
    fn test_validate_args_valid() {
        let input = input_file();
        let dir = tempfile::tempdir().unwrap();
        let args = AggregateArgs {
            input: input.path().to_path_buf(),
            output: dir.path().join("report.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = AggregateArgs {
            input: PathBuf::from("/definitely/not/here.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = AggregateArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_directory() {
        let input = input_file();
        let dir = tempfile::tempdir().unwrap();
        let args = AggregateArgs {
            input: input.path().to_path_buf(),
            output: dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_input_and_output() {
        let input = input_file();
        let args = AggregateArgs {
            input: input.path().to_path_buf(),
            output: input.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_span_beyond_local_calendar() {
        let input = input_file();
        let far = "+262142-12-31T23:59:59Z".parse::<chrono::DateTime<Utc>>().unwrap();
        let args = AggregateArgs {
            input: input.path().to_path_buf(),
            output: PathBuf::from("report.json"),
            span: Span::new(far, far),
            options: AggregateOptions::new()
                .with_utc_offset(chrono::FixedOffset::east_opt(9 * 3600).unwrap()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_report_carries_series_metadata() {
        let series = vec![Series::new("A", Some("#015cfa".to_string()), vec![])];
        let aggregation = Aggregation {
            labels: vec!["2021/11".to_string()],
            values: vec![vec![4.0]],
        };
        let args = AggregateArgs {
            granularity: Granularity::Month,
            span: Span::new(
                Utc.with_ymd_and_hms(2021, 11, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2021, 11, 30, 0, 0, 0).unwrap(),
            ),
            ..Default::default()
        };

        let report = build_report(&args, &series, aggregation);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.granularity, "month");
        assert_eq!(report.week_start, "Sun");
        assert_eq!(report.utc_offset, "+00:00");
        assert_eq!(report.datasets[0].color.as_deref(), Some("#015cfa"));
        assert_eq!(report.datasets[0].total, 4.0);
    }
}
