//! Output writers for chart reports.
//!
//! This module handles writing data to disk and the terminal:
//! - JSON chart and doughnut reports
//! - Series files produced by the demo generator
//! - Text summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{
    read_report, report_to_string, validate_path, write_doughnut, write_report, write_series,
};
pub use text::{generate_share_summary, generate_text_summary};
