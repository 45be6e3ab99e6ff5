//! cbom-consistency - Check a CBOM's summary block against its findings

use cbom_validator::cli::ConsistencyArgs;
use cbom_validator::prelude::*;
use std::process;

fn main() {
    let args = ConsistencyArgs::parse_args();
    match run(&args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("An error occurred: {}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("Caused by: {}", err);
                source = err.source();
            }

            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: &ConsistencyArgs) -> Result<ExitCode> {
    // Create use case with injected adapter
    let use_case = CheckConsistencyUseCase::new(FileSystemReader::new());

    let request = ValidationRequest::new(args.files.clone(), false);
    let report = use_case.validate(&request);

    let formatter = ConsistencyReportFormatter::new();
    let presenter = StdoutPresenter::new();
    presenter.present(&formatter.format(&report))?;

    Ok(report.exit_code())
}
