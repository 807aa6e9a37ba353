//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod aggregate;
pub mod demo;
pub mod utils;

// Re-export main command functions
pub use aggregate::{build_report, execute_aggregate, validate_args, AggregateArgs};
pub use demo::{execute_demo, execute_doughnut, DemoArgs, DoughnutArgs};
pub use utils::{display_schema, display_version, validate_report_file};
