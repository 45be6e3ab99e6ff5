use crate::shared::Result;

/// ReportPresenter port for presenting rendered report lines
///
/// This port abstracts the output destination (stdout in production,
/// a buffer in tests).
pub trait ReportPresenter {
    /// Presents the rendered report lines to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, lines: &[String]) -> Result<()>;
}
