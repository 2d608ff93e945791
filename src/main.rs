//! Main entry point for the katalog CLI app

use katalog::{cli, report};

fn main() -> std::process::ExitCode {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), katalog::ReportError> {
    let args = cli::run();
    report::make_report(&args.path, &args.report)
}
