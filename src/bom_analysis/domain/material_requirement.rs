use super::{BomEdge, Item};
use serde::Serialize;

/// Quantity of one component needed for a production run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    pub component: Item,
    pub required_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

impl MaterialRequirement {
    pub fn new(component: Item, required_quantity: f64, operation: Option<String>) -> Self {
        Self {
            component,
            required_quantity,
            operation,
        }
    }
}

/// One line of an indented multi-level BOM.
///
/// `level` is 1 for the root's direct components. `required_quantity` is the
/// edge quantity multiplied along the whole path from the root, times the
/// requested production quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplodedLine<'a> {
    pub level: usize,
    pub edge: &'a BomEdge,
    pub required_quantity: f64,
}
