use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis results
///
/// This port abstracts the output format (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats an analysis response into its textual representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &AnalysisResponse) -> Result<String>;
}
