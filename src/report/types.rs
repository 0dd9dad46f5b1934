//! Table type definitions for the rendering model.
//!
//! This module defines the cell/row/table structures handed to the report
//! writer, plus the header and icon vocabulary used to fill them.

use serde::{Serialize, Serializer};

/// Content of a single table cell - type-safe rendering model.
///
/// Plain text cells serialize as bare strings; styled cells serialize as
/// `{"data": ..., "header": true, "colspan": "2"}` with absent fields omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Plain body text
    Text(String),

    /// Text with presentation hints
    Styled {
        #[serde(rename = "data")]
        text: String,
        /// Render as a header cell
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        header: bool,
        /// Number of columns this cell spans
        #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_colspan")]
        colspan: Option<u32>,
    },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    pub fn header(text: impl Into<String>) -> Self {
        Cell::Styled { text: text.into(), header: true, colspan: None }
    }

    pub fn spanning(text: impl Into<String>, colspan: u32) -> Self {
        Cell::Styled { text: text.into(), header: false, colspan: Some(colspan) }
    }

    /// The displayed text, regardless of styling.
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(text) | Cell::Styled { text, .. } => text,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Cell::Styled { header: true, .. })
    }

    pub fn colspan(&self) -> Option<u32> {
        match self {
            Cell::Text(_) => None,
            Cell::Styled { colspan, .. } => *colspan,
        }
    }
}

// Report surfaces take colspan as an attribute string.
fn serialize_colspan<S: Serializer>(colspan: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match colspan {
        Some(span) => serializer.serialize_str(&span.to_string()),
        None => serializer.serialize_none(),
    }
}

pub type Row = Vec<Cell>;

/// Ordered rows of cells; row 0 holds the header cells when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a table whose first row is made of header cells.
    pub fn with_header(labels: &[&str]) -> Self {
        Self { rows: vec![labels.iter().map(|label| Cell::header(*label)).collect()] }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// A full-width heading row (two columns wide).
    pub fn push_heading(&mut self, text: String) {
        self.rows.push(vec![Cell::spanning(text, 2)]);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell texts row by row, for comparisons that ignore styling.
    pub fn texts(&self) -> Vec<Vec<&str>> {
        self.rows.iter().map(|row| row.iter().map(Cell::as_str).collect()).collect()
    }
}

/// The three tables produced by a single build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryTables {
    pub summary: Table,
    pub details: Table,
    pub flaky: Table,
}

impl SummaryTables {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.details.is_empty() && self.flaky.is_empty()
    }
}

/// Which of the test outcomes occur anywhere in the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFeatures {
    pub has_passed: bool,
    pub has_skipped: bool,
    pub has_failed: bool,
    pub has_tests: bool,
}

impl RunFeatures {
    /// Header for the "Passed" column.
    pub fn passed_header(&self) -> &'static str {
        match (self.has_tests, self.has_passed, self.has_failed) {
            (false, _, _) => "Passed ❌️",
            (true, false, _) => "Passed",
            (true, true, true) => "Passed ☑️",
            (true, true, false) => "Passed ✅",
        }
    }

    pub fn skipped_header(&self) -> &'static str {
        if self.has_skipped { "Skipped ⚠️" } else { "Skipped" }
    }

    pub fn failed_header(&self) -> &'static str {
        if self.has_failed { "Failed ❌️" } else { "Failed" }
    }
}

/// Icon vocabulary for count cells and detail rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub passed: &'static str,
    pub skipped: &'static str,
    pub failed: &'static str,
    pub passed_detail: &'static str,
    pub skipped_detail: &'static str,
}

impl IconSet {
    /// Emoji-only icons when `simplified`, word labels otherwise.
    pub fn new(simplified: bool) -> Self {
        if simplified {
            IconSet { passed: "✅", skipped: "⚠️", failed: "❌", passed_detail: "✅", skipped_detail: "⚠️" }
        } else {
            IconSet {
                passed: "passed",
                skipped: "skipped",
                failed: "failed",
                passed_detail: "✅ passed",
                skipped_detail: "⚠️ skipped",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_serialization_shapes() {
        let plain = serde_json::to_value(Cell::text("t2")).unwrap();
        assert_eq!(plain, serde_json::json!("t2"));

        let header = serde_json::to_value(Cell::header("Tests")).unwrap();
        assert_eq!(header, serde_json::json!({"data": "Tests", "header": true}));

        let heading = serde_json::to_value(Cell::spanning("<strong>unit</strong>", 2)).unwrap();
        assert_eq!(heading, serde_json::json!({"data": "<strong>unit</strong>", "colspan": "2"}));
    }

    #[test]
    fn test_passed_header_decision_table() {
        let features = |has_tests, has_passed, has_failed| RunFeatures {
            has_tests,
            has_passed,
            has_failed,
            has_skipped: false,
        };
        assert_eq!(features(false, false, false).passed_header(), "Passed ❌️");
        assert_eq!(features(true, false, true).passed_header(), "Passed");
        assert_eq!(features(true, true, true).passed_header(), "Passed ☑️");
        assert_eq!(features(true, true, false).passed_header(), "Passed ✅");
    }

    #[test]
    fn test_table_with_header_marks_header_cells() {
        let table = Table::with_header(&["Test", "Retries"]);
        assert_eq!(table.len(), 1);
        assert!(table.rows()[0].iter().all(Cell::is_header));
        assert_eq!(table.texts(), vec![vec!["Test", "Retries"]]);
    }
}
