use crate::ports::outbound::ReportPresenter;
use crate::shared::error::CbomError;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing report lines to standard output
///
/// Validation results go to stdout; stderr is reserved for the error
/// chain printed on unrecoverable failures.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPresenter for StdoutPresenter {
    fn present(&self, lines: &[String]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for line in lines {
            writeln!(handle, "{}", line).map_err(|e| CbomError::PresentationError {
                details: e.to_string(),
            })?;
        }
        handle.flush().map_err(|e| {
            CbomError::PresentationError {
                details: e.to_string(),
            }
            .into()
        })
    }
}
