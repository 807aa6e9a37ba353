//! Plain-text rendering of aggregated buckets and doughnut slices.

use crate::aggregator::metrics::SeriesStats;
use crate::parser::schema::{ChartReport, ShareSlice};

const LABEL_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 12;
const BAR_WIDTH: usize = 40;

/// Render a bucket table with one column per dataset
///
/// Rows beyond `max_rows` are elided; a zero `max_rows` prints every row.
pub fn generate_text_summary(
    report: &ChartReport,
    stats: &[SeriesStats],
    max_rows: usize,
) -> String {
    let mut lines = Vec::new();
    let columns = report.datasets.len();
    let rule = format!(
        "  +{}+{}",
        "-".repeat(LABEL_WIDTH + 2),
        format!("{}+", "-".repeat(VALUE_WIDTH + 2)).repeat(columns)
    );

    lines.push(format!(
        "  BUCKETS ({}, {} labels)",
        report.granularity,
        report.labels.len()
    ));
    lines.push(rule.clone());

    let mut header = format!("  | {:<width$} |", "Label", width = LABEL_WIDTH);
    for dataset in &report.datasets {
        header.push_str(&format!(
            " {:>width$} |",
            truncate(&dataset.label, VALUE_WIDTH),
            width = VALUE_WIDTH
        ));
    }
    lines.push(header);
    lines.push(rule.clone());

    let shown = if max_rows == 0 {
        report.labels.len()
    } else {
        max_rows.min(report.labels.len())
    };

    for (index, label) in report.labels.iter().take(shown).enumerate() {
        let mut row = format!(
            "  | {:<width$} |",
            truncate(label, LABEL_WIDTH),
            width = LABEL_WIDTH
        );
        for dataset in &report.datasets {
            let value = dataset.data.get(index).copied().unwrap_or(0.0);
            row.push_str(&format!(" {:>width$} |", value, width = VALUE_WIDTH));
        }
        lines.push(row);
    }

    if shown < report.labels.len() {
        lines.push(format!("  | ... {} more", report.labels.len() - shown));
    }
    lines.push(rule);

    for (dataset, stat) in report.datasets.iter().zip(stats) {
        lines.push(format!("  {}: {}", dataset.label, stat.summary()));
    }

    lines.join("\n")
}

/// Render doughnut slices as horizontal bars
pub fn generate_share_summary(slices: &[ShareSlice]) -> String {
    let mut lines = vec!["  SHARES".to_string()];

    for slice in slices {
        let filled = ((slice.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        lines.push(format!(
            "  {:<10} {:<width$} {:>6.1}% ({})",
            truncate(&slice.label, 10),
            "#".repeat(filled.min(BAR_WIDTH)),
            slice.percentage,
            slice.value,
            width = BAR_WIDTH
        ));
    }

    lines.join("\n")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
