/// Configuration resolution module
///
/// This module handles:
/// - The formatting options consumed by the table builder
/// - Mapping CLI arguments onto those options
use crate::cli::CliArgs;
use log::debug;

/// Formatting preferences for a single table build.
///
/// `Default` matches the defaults of the report action: everything off
/// except `include_empty_in_summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Show notice-level (passed) annotations
    pub include_passed: bool,
    /// Build the per-test details table
    pub detailed_summary: bool,
    /// Build the flaky-test table
    pub flaky_summary: bool,
    /// Emit a placeholder row for suites without visible annotations
    pub verbose_summary: bool,
    /// Produce no tables at all when nothing failed
    pub skip_success_summary: bool,
    /// Nest details by test hierarchy instead of the flat annotation list
    pub group_suite: bool,
    /// Render zero counts as "0 <icon>" instead of an empty cell
    pub include_empty_in_summary: bool,
    /// Emoji-only icons
    pub simplified_summary: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            include_passed: false,
            detailed_summary: false,
            flaky_summary: false,
            verbose_summary: false,
            skip_success_summary: false,
            group_suite: false,
            include_empty_in_summary: true,
            simplified_summary: false,
        }
    }
}

impl SummaryOptions {
    /// Build options from already-validated CLI arguments
    pub fn from_args(args: &CliArgs) -> Self {
        let options = SummaryOptions {
            include_passed: args.include_passed,
            detailed_summary: args.detailed_summary,
            flaky_summary: args.flaky_summary,
            verbose_summary: args.verbose_summary,
            skip_success_summary: args.skip_success_summary,
            group_suite: args.group_suite,
            include_empty_in_summary: args.include_empty_in_summary,
            simplified_summary: args.simplified_summary,
        };
        debug!("Resolved summary options: {:?}", options);
        options
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
