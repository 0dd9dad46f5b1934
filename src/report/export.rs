//! Report export functions.
//!
//! This module writes the finished tables as JSON for the report writer.

use super::types::SummaryTables;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the tables as pretty-printed JSON to any writer.
///
/// The document has three keys, `summary`, `details` and `flaky`, each an
/// array of rows.
pub fn write_json_report<W: Write>(tables: &SummaryTables, mut writer: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, tables)?;
    writeln!(writer)?;
    writer.flush()
}

/// Export the tables as JSON to `output_path`.
pub fn export_json_report(tables: &SummaryTables, output_path: &Path) -> std::io::Result<()> {
    debug!(
        "Writing {} summary, {} details and {} flaky rows to {:?}",
        tables.summary.len(),
        tables.details.len(),
        tables.flaky.len(),
        output_path
    );
    let file = File::create(output_path)?;
    write_json_report(tables, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{Cell, Table};

    #[test]
    fn test_json_shape() {
        let mut details = Table::with_header(&["Test", "Result"]);
        details.push_heading("<strong>unit</strong>".to_string());
        details.push_row(vec![Cell::text("t2"), Cell::text("❌ failure")]);
        let tables = SummaryTables { summary: Table::new(), details, flaky: Table::new() };

        let mut buf = Vec::new();
        write_json_report(&tables, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "summary": [],
                "details": [
                    [{"data": "Test", "header": true}, {"data": "Result", "header": true}],
                    [{"data": "<strong>unit</strong>", "colspan": "2"}],
                    ["t2", "❌ failure"]
                ],
                "flaky": []
            })
        );
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");

        export_json_report(&SummaryTables::default(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["summary"], serde_json::json!([]));
    }
}
