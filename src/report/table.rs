//! Summary table construction.
//!
//! This module turns parsed suite results into the three report tables:
//! the per-suite summary, the optional details table and the optional
//! flaky-test table.

use super::details::{append_details, push_annotation_rows};
use super::sink::{InfoSink, LogSink};
use super::types::{Cell, IconSet, RunFeatures, SummaryTables, Table};
use crate::config::SummaryOptions;
use crate::types::{Annotation, TestResult};
use log::debug;

/// Scan all suites for the outcomes that drive header selection.
pub fn detect_features(results: &[TestResult]) -> RunFeatures {
    RunFeatures {
        has_passed: results.iter().any(|r| r.passed > 0),
        has_skipped: results.iter().any(|r| r.skipped > 0),
        has_failed: results.iter().any(|r| r.failed > 0),
        has_tests: results.iter().any(|r| r.total_count > 0),
    }
}

/// Build the report tables, sending informational messages to the `log` facade.
pub fn build_summary_tables(results: &[TestResult], options: &SummaryOptions) -> SummaryTables {
    TableBuilder::new(*options, &LogSink).build(results)
}

/// Accumulates the three tables for one invocation.
///
/// A builder is consumed by [`TableBuilder::build`]; the finished tables are
/// returned by value and never shared with another build.
pub struct TableBuilder<'a> {
    options: SummaryOptions,
    icons: IconSet,
    sink: &'a dyn InfoSink,
    tables: SummaryTables,
}

impl<'a> TableBuilder<'a> {
    pub fn new(options: SummaryOptions, sink: &'a dyn InfoSink) -> Self {
        TableBuilder { options, icons: IconSet::new(options.simplified_summary), sink, tables: SummaryTables::default() }
    }

    pub fn build(mut self, results: &[TestResult]) -> SummaryTables {
        let features = detect_features(results);
        debug!("Building summary tables for {} suites ({:?})", results.len(), features);

        if self.options.skip_success_summary && !features.has_failed {
            debug!("No failures and skip_success_summary set; returning empty tables");
            return SummaryTables::default();
        }

        self.tables.summary = Table::with_header(&[
            "",
            "Tests",
            features.passed_header(),
            features.skipped_header(),
            features.failed_header(),
        ]);
        if self.options.detailed_summary {
            self.tables.details = Table::with_header(&["Test", "Result"]);
        }
        if self.options.flaky_summary {
            self.tables.flaky = Table::with_header(&["Test", "Retries"]);
        }

        for suite in results {
            self.add_suite(suite);
        }

        self.tables
    }

    fn add_suite(&mut self, suite: &TestResult) {
        let icons = self.icons;
        let row = vec![
            Cell::text(suite.check_name.clone()),
            self.count_cell(suite.total_count, "ran"),
            self.count_cell(suite.passed, icons.passed),
            self.count_cell(suite.skipped, icons.skipped),
            self.count_cell(suite.failed, icons.failed),
        ];
        self.tables.summary.push_row(row);

        let annotations = suite.visible_annotations(self.options.include_passed);
        if annotations.is_empty() {
            if !self.options.include_passed {
                self.sink.info(&format!(
                    "⚠️ No annotations found for {}. If you want to include passed results in this table please configure 'include_passed' as 'true'",
                    suite.check_name
                ));
            }
            if self.options.verbose_summary && self.options.detailed_summary {
                self.tables.details.push_heading("No test annotations available".to_string());
            }
            return;
        }

        if self.options.detailed_summary {
            self.add_details(suite, &annotations);
        }
        if self.options.flaky_summary {
            self.add_flaky(suite, &annotations);
        }
    }

    fn add_details(&mut self, suite: &TestResult, annotations: &[&Annotation]) {
        let details = &mut self.tables.details;
        details.push_heading(format!("<strong>{}</strong>", suite.check_name));

        if self.options.group_suite {
            for node in &suite.test_results {
                append_details(node, details, self.options.include_passed, &self.icons);
            }
        } else {
            push_annotation_rows(details, annotations.iter().copied(), &self.icons);
        }
    }

    fn add_flaky(&mut self, suite: &TestResult, annotations: &[&Annotation]) {
        let flaky: Vec<&Annotation> = annotations.iter().copied().filter(|a| a.is_flaky()).collect();
        if flaky.is_empty() {
            return;
        }

        let table = &mut self.tables.flaky;
        table.push_heading(format!("<strong>{}</strong>", suite.check_name));
        for annotation in flaky {
            table.push_row(vec![Cell::text(annotation.title.clone()), Cell::text(annotation.retries.to_string())]);
        }
    }

    fn count_cell(&self, count: u64, suffix: &str) -> Cell {
        if count == 0 && !self.options.include_empty_in_summary {
            Cell::text("")
        } else {
            Cell::text(format!("{} {}", count, suffix))
        }
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
