//! Chart Buckets CLI
//!
//! Buckets timestamped event series by hour, weekday, date, week or month
//! and writes chart-ready JSON reports.

use anyhow::{Context, Result};
use chart_buckets::aggregator::{AggregateOptions, Granularity, LabelStyle};
use chart_buckets::commands::{
    display_schema, display_version, execute_aggregate, execute_demo, execute_doughnut,
    validate_args, validate_report_file, AggregateArgs, DemoArgs, DoughnutArgs,
};
use chart_buckets::parser::schema::Span;
use chart_buckets::parser::{parse_instant, parse_utc_offset, parse_weekday};
use chart_buckets::utils::config::{
    DEFAULT_SEED, DEFAULT_SPAN_FROM, DEFAULT_SPAN_TO, ENV_LABELS, ENV_UTC_OFFSET, ENV_WEEK_START,
};
use chrono::{FixedOffset, Weekday};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Chart Buckets - time-bucket aggregation for charts
#[derive(Parser, Debug)]
#[command(name = "chart-buckets")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Bucket a series file into a chart report
    Aggregate {
        /// Series JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Bucketing unit: hour, day, date, week or month
        #[arg(short, long, default_value = "date")]
        granularity: Granularity,

        /// Start of the span (inclusive)
        #[arg(long, default_value = DEFAULT_SPAN_FROM)]
        from: String,

        /// End of the span (inclusive)
        #[arg(long, default_value = DEFAULT_SPAN_TO)]
        to: String,

        /// Weekday that begins a week bucket
        #[arg(long, env = ENV_WEEK_START, default_value = "sun", value_parser = parse_weekday)]
        week_start: Weekday,

        /// Label language: en or ja
        #[arg(long, env = ENV_LABELS, default_value = "en")]
        labels: LabelStyle,

        /// Offset used as local time, e.g. +09:00
        #[arg(long, env = ENV_UTC_OFFSET, default_value = "UTC", value_parser = parse_utc_offset)]
        utc_offset: FixedOffset,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Maximum rows in the summary table (0 = all)
        #[arg(long, default_value = "0")]
        rows: usize,
    },

    /// Generate a synthetic series file
    Demo {
        /// Output path for the series file
        #[arg(short, long, default_value = "series.json")]
        output: PathBuf,

        /// Generator seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Start of the span events are spread over
        #[arg(long, default_value = DEFAULT_SPAN_FROM)]
        from: String,

        /// End of the span events are spread over
        #[arg(long, default_value = DEFAULT_SPAN_TO)]
        to: String,

        /// Offset used to read --from/--to
        #[arg(long, env = ENV_UTC_OFFSET, default_value = "UTC", value_parser = parse_utc_offset)]
        utc_offset: FixedOffset,
    },

    /// Generate synthetic doughnut slices
    Doughnut {
        /// Output path for the doughnut report
        #[arg(short, long, default_value = "doughnut.json")]
        output: PathBuf,

        /// Generator seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Print the slices to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a chart report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Aggregate {
            input,
            granularity,
            from,
            to,
            week_start,
            labels,
            utc_offset,
            output,
            summary,
            rows,
        } => {
            let options = AggregateOptions::new()
                .with_week_start(week_start)
                .with_label_style(labels)
                .with_utc_offset(utc_offset);

            let args = AggregateArgs {
                input,
                output,
                granularity,
                span: resolve_span(&from, &to, &utc_offset)?,
                options,
                print_summary: summary,
                summary_rows: rows,
            };

            // Validate args first
            validate_args(&args)?;

            execute_aggregate(args)?;
        }

        Commands::Demo {
            output,
            seed,
            from,
            to,
            utc_offset,
        } => {
            let args = DemoArgs {
                output,
                seed,
                span: resolve_span(&from, &to, &utc_offset)?,
            };

            execute_demo(args)?;
        }

        Commands::Doughnut {
            output,
            seed,
            summary,
        } => {
            execute_doughnut(DoughnutArgs {
                output,
                seed,
                print_summary: summary,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Parse --from/--to in the given local offset
fn resolve_span(from: &str, to: &str, offset: &FixedOffset) -> Result<Span> {
    let from = parse_instant(from, offset).context("Invalid --from")?;
    let to = parse_instant(to, offset).context("Invalid --to")?;
    Ok(Span::new(from, to))
}
