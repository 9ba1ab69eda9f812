use clap::{CommandFactory, Parser};
use mailsort_cli::args::Args;
use mailsort_cli::config::Config;
use mailsort_cli::logging;
use mailsort_cli::presentation::{self, ConsoleProgress};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("{e}");
    }

    if args.files.is_empty() {
        eprintln!("error: at least one input file is required");
        eprintln!();
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::FAILURE;
    }

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut progress = ConsoleProgress::new(args.quiet);
    match mailsort_engine::run(&config, &mut progress) {
        Ok(report) => {
            if !args.quiet {
                presentation::print_summary(&report);
            }
            if let Some(notice) = presentation::render_skipped(&report) {
                eprintln!("{notice}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
