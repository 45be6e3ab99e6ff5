//! cbom-schema - Check a CBOM against CycloneDX 1.6 conventions

use cbom_validator::cli::SchemaArgs;
use cbom_validator::prelude::*;
use std::process;

fn main() {
    let args = SchemaArgs::parse_args();
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

fn run(args: &SchemaArgs) -> Result<ExitCode> {
    // Create use case with injected adapter
    let use_case = CheckSchemaUseCase::new(FileSystemReader::new());

    let request = ValidationRequest::new(args.files.clone(), args.strict);
    let report = use_case.validate(&request);

    let formatter = SchemaReportFormatter::new(args.strict);
    let presenter = StdoutPresenter::new();
    presenter.present(&formatter.format(&report))?;

    Ok(report.exit_code())
}
