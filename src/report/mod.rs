//! Report generation module - Table construction for CI job summaries.
//!
//! This module handles:
//! - Selecting summary headers and icons from the run's outcomes
//! - Building the summary, details and flaky-test tables
//! - Grouped (tree-shaped) details rendering
//! - Export of the finished tables as JSON
//!
//! Rendering the tables into Markdown/HTML is left to the report writer.
//!
//! # Module Organization
//!
//! - `types` - Rendering model (Cell, Table, SummaryTables, IconSet, RunFeatures)
//! - `table` - TableBuilder and the one-call `build_summary_tables`
//! - `details` - Depth-first details walk for grouped mode
//! - `sink` - Informational message side channel
//! - `export` - JSON export

mod details;
mod export;
mod sink;
mod table;
mod types;

// Re-export types
pub use types::{Cell, IconSet, Row, RunFeatures, SummaryTables, Table};

// Re-export table construction
pub use details::append_details;
pub use table::{TableBuilder, build_summary_tables, detect_features};

// Re-export the side channel
pub use sink::{InfoSink, LogSink};

// Re-export export functions
pub use export::{export_json_report, write_json_report};
