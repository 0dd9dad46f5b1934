/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::SummaryOptions;
    use clap::Parser;

    #[test]
    fn test_default_options() {
        let options = SummaryOptions::default();
        assert!(!options.include_passed);
        assert!(!options.group_suite);
        assert!(!options.simplified_summary);
        assert!(options.include_empty_in_summary, "zero counts are shown by default");
    }

    #[test]
    fn test_from_args_without_flags_matches_default() {
        let args = CliArgs::try_parse_from(["ci-test-summary", "--input", "-"]).expect("Should parse");
        assert_eq!(SummaryOptions::from_args(&args), SummaryOptions::default());
    }

    #[test]
    fn test_from_args_maps_every_flag() {
        let args = CliArgs::try_parse_from([
            "ci-test-summary",
            "--input",
            "-",
            "--include-passed",
            "--detailed-summary",
            "--flaky-summary",
            "--verbose-summary",
            "--skip-success-summary",
            "--group-suite",
            "--include-empty-in-summary",
            "false",
            "--simplified-summary",
        ])
        .expect("Should parse");

        let options = SummaryOptions::from_args(&args);
        assert_eq!(
            options,
            SummaryOptions {
                include_passed: true,
                detailed_summary: true,
                flaky_summary: true,
                verbose_summary: true,
                skip_success_summary: true,
                group_suite: true,
                include_empty_in_summary: false,
                simplified_summary: true,
            }
        );
    }
}
