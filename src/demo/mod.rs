//! Synthetic data for exercising charts without a real data source.

pub mod generator;

pub use generator::DemoGenerator;
