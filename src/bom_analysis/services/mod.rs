mod bom_validator;
mod multi_level_expander;
mod requirement_calculator;

pub use bom_validator::{BomValidator, ValidationOptions};
pub use multi_level_expander::MultiLevelExpander;
pub use requirement_calculator::RequirementCalculator;
