/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach external systems (REST API, file system, console).
pub mod bom_source;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use bom_source::BomSource;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
