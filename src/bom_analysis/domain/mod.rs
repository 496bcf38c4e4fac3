pub mod bom_edge;
pub mod bom_repository;
pub mod item;
pub mod material_requirement;
pub mod validation_report;

pub use bom_edge::{BomEdge, BomEdgeRecord, DEFAULT_OPERATION_GROUP};
pub use bom_repository::BomRepository;
pub use item::{Item, ItemId};
pub use material_requirement::{ExplodedLine, MaterialRequirement};
pub use validation_report::{BomIssue, ValidationReport};
