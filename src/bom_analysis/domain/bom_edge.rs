use super::{Item, ItemId};
use crate::shared::error::BomError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group label used for edges that carry no operation
pub const DEFAULT_OPERATION_GROUP: &str = "default";

/// Wire shape of a BOM record as served by `/billofmaterials`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomEdgeRecord {
    pub id: u64,
    pub product_id: ItemId,
    pub component_id: ItemId,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<Item>,
}

/// One bill-of-materials line: `quantity` units of `component` are consumed
/// per unit of `product`, optionally during a named `operation`.
///
/// Edges built through [`BomEdge::new`] are checked for self-reference and a
/// positive quantity. Edges deserialized from a source are taken as-is; the
/// graph services never assume those invariants hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BomEdgeRecord", into = "BomEdgeRecord")]
pub struct BomEdge {
    id: u64,
    product: Item,
    component: Item,
    quantity: f64,
    operation: Option<String>,
    created_at: DateTime<Utc>,
}

impl BomEdge {
    pub fn new(
        id: u64,
        product: Item,
        component: Item,
        quantity: f64,
        operation: Option<String>,
    ) -> Result<Self> {
        if product.id() == component.id() {
            return Err(BomError::InvalidEdge {
                reason: format!("product {} cannot list itself as a component", product.id()),
            }
            .into());
        }

        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(BomError::InvalidEdge {
                reason: format!("quantity must be a positive number, got {}", quantity),
            }
            .into());
        }

        Ok(Self {
            id,
            product,
            component,
            quantity,
            operation,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn product_id(&self) -> ItemId {
        self.product.id()
    }

    pub fn component_id(&self) -> ItemId {
        self.component.id()
    }

    pub fn product(&self) -> &Item {
        &self.product
    }

    pub fn component(&self) -> &Item {
        &self.component
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Operation label, or [`DEFAULT_OPERATION_GROUP`] when absent or empty.
    ///
    /// Any other label, whitespace included, is its own group.
    pub fn operation_group(&self) -> &str {
        match self.operation() {
            Some(operation) if !operation.is_empty() => operation,
            _ => DEFAULT_OPERATION_GROUP,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl From<BomEdgeRecord> for BomEdge {
    fn from(record: BomEdgeRecord) -> Self {
        let product = record
            .product
            .map(|item| item.with_id(record.product_id))
            .unwrap_or_else(|| Item::unnamed(record.product_id));
        let component = record
            .component
            .map(|item| item.with_id(record.component_id))
            .unwrap_or_else(|| Item::unnamed(record.component_id));

        Self {
            id: record.id,
            product,
            component,
            quantity: record.quantity,
            operation: record.operation,
            created_at: record.created_at,
        }
    }
}

impl From<BomEdge> for BomEdgeRecord {
    fn from(edge: BomEdge) -> Self {
        Self {
            id: edge.id,
            product_id: edge.product.id(),
            component_id: edge.component.id(),
            quantity: edge.quantity,
            operation: edge.operation,
            created_at: edge.created_at,
            product: Some(edge.product),
            component: Some(edge.component),
        }
    }
}
