use ci_test_summary::cli::CliArgs;
use ci_test_summary::config::SummaryOptions;
use ci_test_summary::{input, report, ui};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let results = if args.reads_stdin() { input::load_results_from_stdin() } else { input::load_results(&args.input) };
    let results = match results {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    let options = SummaryOptions::from_args(&args);
    let tables = report::build_summary_tables(&results, &options);

    let written = match args.output {
        Some(ref path) => report::export_json_report(&tables, path).map(|_| {
            ui::status(&format!("wrote {} suites to {}", results.len(), path.display()));
        }),
        None => report::write_json_report(&tables, std::io::stdout().lock()),
    };

    if let Err(e) = written {
        ui::print_error(&format!("Failed to write tables: {}", e));
        std::process::exit(1);
    }
}
