//! Grouped rendering of the details table.
//!
//! Walks a suite's nested result tree and appends one `<em>` heading per
//! node that has visible annotations, followed by those annotations.

use super::types::{Cell, IconSet, Table};
use crate::types::{ActualTestResult, Annotation, TestStatus};

/// Result column text for one annotation.
pub(crate) fn result_icon(annotation: &Annotation, icons: &IconSet) -> String {
    match annotation.status {
        TestStatus::Success => icons.passed_detail.to_string(),
        TestStatus::Skipped => icons.skipped_detail.to_string(),
        TestStatus::Failure => format!("❌ {}", annotation.annotation_level.as_str()),
    }
}

/// Append `[title, result]` rows for the given annotations.
pub(crate) fn push_annotation_rows<'a>(
    table: &mut Table,
    annotations: impl IntoIterator<Item = &'a Annotation>,
    icons: &IconSet,
) {
    for annotation in annotations {
        table.push_row(vec![Cell::text(annotation.title.clone()), Cell::text(result_icon(annotation, icons))]);
    }
}

/// Append rows for `node` and all of its descendants in depth-first pre-order.
///
/// Nodes without visible annotations emit nothing themselves, but their
/// descendants are still visited. Uses an explicit stack, so arbitrarily deep
/// trees cannot overflow the call stack.
pub fn append_details(node: &ActualTestResult, into: &mut Table, include_passed: bool, icons: &IconSet) {
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        let visible: Vec<&Annotation> =
            current.annotations.iter().filter(|a| a.is_visible(include_passed)).collect();

        if !visible.is_empty() {
            into.push_heading(format!("<em>{}</em>", current.name));
            push_annotation_rows(into, visible, icons);
        }

        // Reverse so the first child is popped next
        stack.extend(current.test_results.iter().rev());
    }
}
