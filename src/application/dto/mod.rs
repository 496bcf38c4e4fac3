/// Data Transfer Objects for the application layer
///
/// DTOs carry requests in and reports out of the use case, keeping the
/// domain layer free of presentation concerns.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::{AnalysisKind, AnalysisRequest};
pub use analysis_response::{
    AnalysisMetadata, AnalysisReport, AnalysisResponse, ExpansionLine, ProductValidation,
};
pub use output_format::OutputFormat;
