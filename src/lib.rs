//! bom-graph - bill-of-materials graph analysis
//!
//! This library loads BOM edges (product → component, quantity, operation)
//! from a REST endpoint or a JSON file and answers structural questions about
//! the graph they form, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_analysis`): BOM model, graph queries, validation,
//!   multi-level expansion and requirement calculation
//! - **Application Layer** (`application`): the BOM store, use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let source = JsonFileBomSource::new(PathBuf::from("bom.json"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let mut use_case = AnalyzeBomUseCase::new(
//!     BomStore::new(source),
//!     progress_reporter,
//!     BomValidator::new(),
//! );
//!
//! // Execute
//! let request = AnalysisRequest::new(AnalysisKind::Validate { product: None });
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The graph services work on a [`BomRepository`](bom_analysis::domain::BomRepository)
//! directly and never perform I/O:
//!
//! ```
//! use bom_graph::prelude::*;
//!
//! let edge = BomEdge::new(1, Item::new(1, "Table"), Item::new(2, "Leg"), 4.0, None).unwrap();
//! let repository = BomRepository::new(vec![edge]);
//!
//! let requirements = RequirementCalculator::requirements(&repository, ItemId::new(1), 10.0);
//! assert_eq!(requirements[0].required_quantity, 40.0);
//! ```

pub mod adapters;
pub mod application;
pub mod bom_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileBomSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::BomApiClient;
    pub use crate::application::dto::{
        AnalysisKind, AnalysisReport, AnalysisRequest, AnalysisResponse, OutputFormat,
    };
    pub use crate::application::store::{BomStore, StaleDataPolicy};
    pub use crate::application::use_cases::AnalyzeBomUseCase;
    pub use crate::bom_analysis::domain::{
        BomEdge, BomIssue, BomRepository, Item, ItemId, MaterialRequirement, ValidationReport,
    };
    pub use crate::bom_analysis::services::{
        BomValidator, MultiLevelExpander, RequirementCalculator, ValidationOptions,
    };
    pub use crate::ports::outbound::{
        BomSource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
