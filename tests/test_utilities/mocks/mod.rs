/// Mock implementations for testing
mod mock_bom_source;
mod mock_progress_reporter;

pub use mock_bom_source::MockBomSource;
pub use mock_progress_reporter::MockProgressReporter;
