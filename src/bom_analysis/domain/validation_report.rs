use super::ItemId;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A structural problem found in a BOM graph.
///
/// Issues are reported as data; the `Display` text is the message shown to
/// users and serialized into the report's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BomIssue {
    #[error("Product {product} has no BOM entries")]
    NoBomEntries { product: ItemId },

    #[error("Circular dependency detected: {}", format_path(.path))]
    CircularDependency { path: Vec<ItemId> },

    #[error("Duplicate component {component} in operation '{operation}' of product {product}")]
    DuplicateComponent {
        product: ItemId,
        operation: String,
        component: ItemId,
    },
}

fn format_path(path: &[ItemId]) -> String {
    path.iter()
        .map(ItemId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Outcome of validating one product: `{ valid, errors }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    issues: Vec<BomIssue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<BomIssue>) -> Self {
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[BomIssue] {
        &self.issues
    }

    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn has_cycle(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| matches!(issue, BomIssue::CircularDependency { .. }))
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire {
            valid: bool,
            errors: Vec<String>,
        }

        Wire {
            valid: self.is_valid(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}
