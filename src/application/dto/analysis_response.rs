use crate::bom_analysis::domain::{
    BomEdge, ExplodedLine, Item, MaterialRequirement, ValidationReport,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Provenance of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub tool_name: String,
    pub tool_version: String,
    pub source: String,
    pub edge_count: usize,
}

impl AnalysisMetadata {
    pub fn new(source: String, edge_count: usize) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            source,
            edge_count,
        }
    }
}

/// Validation outcome for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductValidation {
    pub product: Item,
    #[serde(flatten)]
    pub report: ValidationReport,
}

/// Owned line of a multi-level expansion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionLine {
    pub level: usize,
    pub edge: BomEdge,
    pub required_quantity: f64,
}

impl From<ExplodedLine<'_>> for ExpansionLine {
    fn from(line: ExplodedLine<'_>) -> Self {
        Self {
            level: line.level,
            edge: line.edge.clone(),
            required_quantity: line.required_quantity,
        }
    }
}

/// Result payload, one variant per analysis kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisReport {
    Validation {
        results: Vec<ProductValidation>,
    },
    #[serde(rename_all = "camelCase")]
    Expansion {
        product: Item,
        production_quantity: f64,
        lines: Vec<ExpansionLine>,
    },
    #[serde(rename_all = "camelCase")]
    Requirements {
        product: Item,
        production_quantity: f64,
        multi_level: bool,
        requirements: Vec<MaterialRequirement>,
    },
    WhereUsed {
        component: Item,
        usages: Vec<BomEdge>,
    },
    Catalog {
        products: Vec<Item>,
        components: Vec<Item>,
        operations: Vec<String>,
    },
}

impl AnalysisReport {
    /// Whether a validation report contains at least one invalid product
    pub fn has_validation_errors(&self) -> bool {
        match self {
            AnalysisReport::Validation { results } => {
                results.iter().any(|result| !result.report.is_valid())
            }
            _ => false,
        }
    }
}

/// AnalysisResponse - response DTO from the BOM analysis use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub metadata: AnalysisMetadata,
    pub report: AnalysisReport,
}

impl AnalysisResponse {
    pub fn new(metadata: AnalysisMetadata, report: AnalysisReport) -> Self {
        Self { metadata, report }
    }
}
