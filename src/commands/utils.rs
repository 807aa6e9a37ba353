use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a chart report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    let misaligned: Vec<&str> = report
        .datasets
        .iter()
        .filter(|d| d.data.len() != report.labels.len())
        .map(|d| d.label.as_str())
        .collect();

    if !misaligned.is_empty() {
        anyhow::bail!(
            "Datasets not aligned with {} labels: {}",
            report.labels.len(),
            misaligned.join(", ")
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Granularity: {}", report.granularity);
    println!("  Labels: {}", report.labels.len());
    println!("  Datasets: {}", report.datasets.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Chart Buckets Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  granularity: string      - hour | day | date | week | month");
        println!("  week_start: string       - Weekday that begins week buckets");
        println!("  utc_offset: string       - Offset used as local time");
        println!("  span: object             - Inclusive range of the label axis");
        println!("    from: string           - RFC 3339 timestamp");
        println!("    to: string             - RFC 3339 timestamp");
        println!("  labels: array            - Shared bucket labels");
        println!("  datasets: array          - One entry per input series");
        println!("    label: string          - Series name");
        println!("    color: string?         - Series color");
        println!("    data: array            - Bucket sums aligned with labels");
        println!("    total: number          - Sum over all buckets");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Chart Buckets v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Time-bucket aggregation of timestamped events for line and doughnut charts.");
}
