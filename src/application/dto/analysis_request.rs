use crate::bom_analysis::domain::ItemId;

/// What to compute once the BOM snapshot is loaded
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisKind {
    /// Structural validation of one product, or of every product when `product` is `None`
    Validate { product: Option<ItemId> },
    /// Flattened multi-level BOM with cumulative quantities for `quantity` units
    Expand { product: ItemId, quantity: f64 },
    /// Material requirements for a run of `quantity` units
    Requirements {
        product: ItemId,
        quantity: f64,
        multi_level: bool,
    },
    /// Every assembly that consumes `component`
    WhereUsed { component: ItemId },
    /// Products, components and operations present in the snapshot
    Catalog,
}

/// AnalysisRequest - request DTO for the BOM analysis use case
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub kind: AnalysisKind,
}

impl AnalysisRequest {
    pub fn new(kind: AnalysisKind) -> Self {
        Self { kind }
    }
}
