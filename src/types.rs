/// Core data structures for parsed test results
///
/// This module defines the input model produced by the upstream test result
/// parser: suites, nested test nodes and the annotations attached to them.
/// Field names follow the parser's JSON output.
use serde::{Deserialize, Serialize};

/// Severity the parser assigned to an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

impl AnnotationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationLevel::Notice => "notice",
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Failure => "failure",
        }
    }
}

/// Final status of a single test case
///
/// Any status other than `success` or `skipped` counts as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TestStatus {
    Success,
    Skipped,
    Failure,
}

impl From<String> for TestStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "success" => TestStatus::Success,
            "skipped" => TestStatus::Skipped,
            _ => TestStatus::Failure,
        }
    }
}

/// One reported outcome for a single test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub title: String,
    pub annotation_level: AnnotationLevel,
    pub status: TestStatus,
    /// Attempts before the final status was reached (0 = first try)
    #[serde(default)]
    pub retries: u32,
}

impl Annotation {
    /// Notice-level annotations describe passed tests and are hidden unless asked for.
    pub fn is_visible(&self, include_passed: bool) -> bool {
        include_passed || self.annotation_level != AnnotationLevel::Notice
    }

    pub fn is_flaky(&self) -> bool {
        self.retries > 0
    }
}

/// A test case or test group inside a suite's result tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActualTestResult {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default, rename = "testResults")]
    pub test_results: Vec<ActualTestResult>,
}

/// One suite (check run) with its aggregated counts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub check_name: String,
    pub total_count: u64,
    pub passed: u64,
    pub skipped: u64,
    pub failed: u64,
    /// Flattened view of every annotation in `test_results`
    #[serde(default)]
    pub global_annotations: Vec<Annotation>,
    #[serde(default)]
    pub test_results: Vec<ActualTestResult>,
}

impl TestResult {
    /// Whether `total_count` equals the sum of the per-status counts.
    ///
    /// A sum that does not fit in `u64` is reported as inconsistent.
    pub fn counts_consistent(&self) -> bool {
        self.passed
            .checked_add(self.skipped)
            .and_then(|sum| sum.checked_add(self.failed))
            .is_some_and(|sum| sum == self.total_count)
    }

    /// Annotations that survive the notice filter, in input order
    pub fn visible_annotations(&self, include_passed: bool) -> Vec<&Annotation> {
        self.global_annotations.iter().filter(|a| a.is_visible(include_passed)).collect()
    }
}
