/// Loading of parsed test results
///
/// The upstream parser hands us its results as a JSON array of suites.
/// Counts are trusted as given; inconsistent totals are only reported.
///
/// serde_json caps nesting at 128 levels, which leaves room for roughly 60
/// levels of `testResults` per suite. Deeper input is rejected with a parse
/// error; the table builder itself has no depth limit.
use crate::types::TestResult;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse suites from any reader.
pub fn read_results<R: Read>(reader: R) -> Result<Vec<TestResult>, String> {
    let results: Vec<TestResult> =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse test results: {}", e))?;

    for suite in &results {
        if !suite.counts_consistent() {
            warn!(
                "{}: totalCount {} does not match passed {} + skipped {} + failed {}",
                suite.check_name, suite.total_count, suite.passed, suite.skipped, suite.failed
            );
        }
    }

    debug!("Loaded {} suites", results.len());
    Ok(results)
}

/// Load suites from a JSON file.
pub fn load_results(path: &Path) -> Result<Vec<TestResult>, String> {
    debug!("Reading test results from {:?}", path);
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    read_results(BufReader::new(file))
}

/// Load suites from standard input.
pub fn load_results_from_stdin() -> Result<Vec<TestResult>, String> {
    debug!("Reading test results from stdin");
    read_results(std::io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_results_array() {
        let json = r#"[
            {"checkName": "a", "totalCount": 1, "passed": 1, "skipped": 0, "failed": 0},
            {"checkName": "b", "totalCount": 1, "passed": 0, "skipped": 0, "failed": 1, "globalAnnotations": []}
        ]"#;
        let results = read_results(json.as_bytes()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].check_name, "b");
        assert!(results[0].global_annotations.is_empty());
    }

    #[test]
    fn test_inconsistent_counts_are_kept() {
        let json = r#"[{"checkName": "odd", "totalCount": 9, "passed": 1, "skipped": 0, "failed": 0}]"#;
        let results = read_results(json.as_bytes()).unwrap();
        assert_eq!(results[0].total_count, 9);
    }

    #[test]
    fn test_counts_overflowing_u64_only_warn() {
        let json = r#"[{"checkName": "big", "totalCount": 1, "passed": 18446744073709551615, "skipped": 1, "failed": 0}]"#;
        let results = read_results(json.as_bytes()).unwrap();
        assert_eq!(results[0].passed, u64::MAX);
        assert!(!results[0].counts_consistent());
    }

    fn nested_suite_json(depth: usize) -> String {
        let mut node = r#"{"name": "leaf", "annotations": [{"title": "deep", "annotation_level": "failure", "status": "failure"}]}"#.to_string();
        for level in 0..depth {
            node = format!(r#"{{"name": "level-{}", "testResults": [{}]}}"#, level, node);
        }
        format!(
            r#"[{{"checkName": "deep", "totalCount": 1, "passed": 0, "skipped": 0, "failed": 1, "testResults": [{}]}}]"#,
            node
        )
    }

    #[test]
    fn test_nesting_within_parser_limit_loads() {
        let results = read_results(nested_suite_json(50).as_bytes()).unwrap();
        let mut node = &results[0].test_results[0];
        let mut depth = 0;
        while let Some(child) = node.test_results.first() {
            node = child;
            depth += 1;
        }
        assert_eq!(depth, 50);
        assert_eq!(node.name, "leaf");
    }

    #[test]
    fn test_nesting_beyond_parser_limit_is_parse_error() {
        let err = read_results(nested_suite_json(70).as_bytes()).unwrap_err();
        assert!(err.starts_with("Failed to parse test results"));
        assert!(err.contains("recursion limit exceeded"));
    }

    #[test]
    fn test_read_results_rejects_invalid_json() {
        let err = read_results("{not json".as_bytes()).unwrap_err();
        assert!(err.starts_with("Failed to parse test results"));
    }

    #[test]
    fn test_load_results_missing_file() {
        let err = load_results(Path::new("/nonexistent/results.json")).unwrap_err();
        assert!(err.contains("Failed to open"));
    }
}
