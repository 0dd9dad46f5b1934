//! Render parsed test results into the tables of a CI job summary.
//!
//! The entry point is [`report::build_summary_tables`] (or
//! [`report::TableBuilder`] with a custom [`report::InfoSink`]). It turns a
//! slice of [`types::TestResult`] into a summary table, an optional details
//! table and an optional flaky-test table.

pub mod cli;
pub mod config;
pub mod input;
pub mod report;
pub mod types;
pub mod ui;

pub use config::SummaryOptions;
pub use report::{SummaryTables, build_summary_tables};
pub use types::{ActualTestResult, Annotation, AnnotationLevel, TestResult, TestStatus};
