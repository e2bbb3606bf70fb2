//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the core
//! use cases of the application.

mod predictor;
mod report;

pub use predictor::{Predictor, RiskService};
pub use report::{display_name, report_file_name, ReportService};
