use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Input path meaning "read from standard input"
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug, Clone)]
#[command(name = "ci-test-summary")]
#[command(about = "Turn parsed test results into summary tables for a CI job summary")]
#[command(version)]
pub struct CliArgs {
    /// JSON file with the parsed test results (array of suites), or "-" for stdin.
    /// Result trees nested deeper than about 60 levels are rejected.
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Where to write the tables as JSON (default: stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Include passed (notice-level) annotations in the detail tables
    #[arg(long)]
    pub include_passed: bool,

    /// Build the per-test details table
    #[arg(long)]
    pub detailed_summary: bool,

    /// Build the table of tests that only passed after retries
    #[arg(long)]
    pub flaky_summary: bool,

    /// Add a placeholder row for suites without any visible annotation
    #[arg(long)]
    pub verbose_summary: bool,

    /// Emit empty tables when no test failed
    #[arg(long)]
    pub skip_success_summary: bool,

    /// Group the details table by test hierarchy instead of a flat list (needs --detailed-summary)
    #[arg(long)]
    pub group_suite: bool,

    /// Show "0 passed" style cells for zero counts (pass false to leave them blank)
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub include_empty_in_summary: bool,

    /// Use emoji instead of word labels for the result icons
    #[arg(long)]
    pub simplified_summary: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Whether the results are read from standard input
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if !self.reads_stdin() && !self.input.is_file() {
            return Err(format!("Input file not found: {}", self.input.display()));
        }

        if let Some(ref output) = self.output {
            if output == &self.input {
                return Err("Output path must differ from the input path".to_string());
            }
        }

        Ok(())
    }
}
