//! Demo data commands.
//!
//! `demo` writes a series file of synthetic events, `doughnut` writes
//! synthetic share slices. Both are deterministic for a given seed.

use crate::aggregator::calculate_shares;
use crate::demo::DemoGenerator;
use crate::output::{generate_share_summary, validate_path, write_doughnut, write_series};
use crate::parser::schema::{DoughnutReport, Series, Span};
use crate::utils::config::{DEFAULT_SEED, SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use std::path::PathBuf;

/// Arguments for the demo command
#[derive(Debug, Clone)]
pub struct DemoArgs {
    /// Output path for the series file
    pub output: PathBuf,

    /// Generator seed
    pub seed: u64,

    /// Span the events are spread over
    pub span: Span,
}

/// Generate demo series and write them as a series file
pub fn execute_demo(args: DemoArgs) -> Result<Vec<Series>> {
    validate_path(&args.output).context("Invalid output path")?;

    info!(
        "Generating demo series (seed {}) over {} .. {}",
        args.seed, args.span.from, args.span.to
    );

    let series = DemoGenerator::new(args.seed).generate_series(&args.span);
    for s in &series {
        info!("  {}: {} events", s.name, s.events.len());
    }

    write_series(&series, &args.output).context("Failed to write series file")?;
    info!("✓ Series written to: {}", args.output.display());

    Ok(series)
}

/// Arguments for the doughnut command
#[derive(Debug, Clone)]
pub struct DoughnutArgs {
    /// Output path for the doughnut report
    pub output: PathBuf,

    /// Generator seed
    pub seed: u64,

    /// Print the slices as bars to stdout
    pub print_summary: bool,
}

impl Default for DoughnutArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("doughnut.json"),
            seed: DEFAULT_SEED,
            print_summary: false,
        }
    }
}

/// Generate doughnut slices and write them as a report
pub fn execute_doughnut(args: DoughnutArgs) -> Result<DoughnutReport> {
    validate_path(&args.output).context("Invalid output path")?;

    let entries = DemoGenerator::new(args.seed).generate_doughnut();
    let report = DoughnutReport {
        version: SCHEMA_VERSION.to_string(),
        slices: calculate_shares(&entries),
        generated_at: Utc::now().to_rfc3339(),
    };

    write_doughnut(&report, &args.output).context("Failed to write doughnut report")?;
    info!(
        "✓ {} slices written to: {}",
        report.slices.len(),
        args.output.display()
    );

    if args.print_summary {
        println!("\n{}", generate_share_summary(&report.slices));
    }

    Ok(report)
}
