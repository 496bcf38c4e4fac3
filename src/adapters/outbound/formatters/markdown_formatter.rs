use crate::application::dto::{
    AnalysisMetadata, AnalysisReport, AnalysisResponse, ExpansionLine, ProductValidation,
};
use crate::bom_analysis::domain::{BomEdge, Item, MaterialRequirement};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const EDGE_TABLE_HEADER: &str = "| Edge | Product | Component | Quantity | Operation |\n";
const EDGE_TABLE_SEPARATOR: &str = "|------|---------|-----------|----------|-----------|\n";

const EXPANSION_TABLE_HEADER: &str =
    "| Level | Product | Component | Quantity per Unit | Required Quantity | Operation |\n";
const EXPANSION_TABLE_SEPARATOR: &str =
    "|-------|---------|-----------|-------------------|-------------------|-----------|\n";

const REQUIREMENT_TABLE_HEADER: &str = "| Component | Required Quantity | Operation |\n";
const REQUIREMENT_TABLE_SEPARATOR: &str = "|-----------|-------------------|-----------|\n";

/// MarkdownFormatter adapter rendering a human-readable report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn item_cell(item: &Item) -> String {
        Self::escape_markdown_table_cell(&item.to_string())
    }

    fn operation_cell(operation: Option<&str>) -> String {
        operation
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Section renderers
impl MarkdownFormatter {
    fn render_metadata(&self, output: &mut String, metadata: &AnalysisMetadata) {
        output.push_str(&format!(
            "- Source: `{}`\n- BOM edges: {}\n- Generated: {}\n- Tool: {} {}\n\n",
            metadata.source,
            metadata.edge_count,
            metadata.generated_at.to_rfc3339(),
            metadata.tool_name,
            metadata.tool_version
        ));
    }

    fn render_validation(&self, output: &mut String, results: &[ProductValidation]) {
        output.push_str("## Validation\n\n");
        if results.is_empty() {
            output.push_str("No products to validate.\n");
            return;
        }

        output.push_str("| Product | Status | Issues |\n");
        output.push_str("|---------|--------|--------|\n");
        for result in results {
            let (status, issues) = if result.report.is_valid() {
                ("✅ Valid", "-".to_string())
            } else {
                ("❌ Invalid", result.report.issues().len().to_string())
            };
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::item_cell(&result.product),
                status,
                issues
            ));
        }
        output.push('\n');

        for result in results.iter().filter(|r| !r.report.is_valid()) {
            output.push_str(&format!("### {}\n\n", result.product));
            for error in result.report.errors() {
                output.push_str(&format!("- {}\n", error));
            }
            output.push('\n');
        }
    }

    fn render_expansion(
        &self,
        output: &mut String,
        product: &Item,
        production_quantity: f64,
        lines: &[ExpansionLine],
    ) {
        output.push_str(&format!(
            "## Multi-level BOM of {} (x{})\n\n",
            product, production_quantity
        ));
        if lines.is_empty() {
            output.push_str("No BOM entries.\n");
            return;
        }

        output.push_str(EXPANSION_TABLE_HEADER);
        output.push_str(EXPANSION_TABLE_SEPARATOR);
        for line in lines {
            let indent = "  ".repeat(line.level.saturating_sub(1));
            output.push_str(&format!(
                "| {} | {} | {}{} | {} | {} | {} |\n",
                line.level,
                Self::item_cell(line.edge.product()),
                indent,
                Self::item_cell(line.edge.component()),
                line.edge.quantity(),
                line.required_quantity,
                Self::operation_cell(line.edge.operation())
            ));
        }
    }

    fn render_requirements(
        &self,
        output: &mut String,
        product: &Item,
        production_quantity: f64,
        multi_level: bool,
        requirements: &[MaterialRequirement],
    ) {
        let scope = if multi_level { "Leaf material" } else { "Material" };
        output.push_str(&format!(
            "## {} requirements for {} (x{})\n\n",
            scope, product, production_quantity
        ));
        if requirements.is_empty() {
            output.push_str("No material requirements.\n");
            return;
        }

        output.push_str(REQUIREMENT_TABLE_HEADER);
        output.push_str(REQUIREMENT_TABLE_SEPARATOR);
        for requirement in requirements {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::item_cell(&requirement.component),
                requirement.required_quantity,
                Self::operation_cell(requirement.operation.as_deref())
            ));
        }
    }

    fn render_where_used(&self, output: &mut String, component: &Item, usages: &[BomEdge]) {
        output.push_str(&format!("## Where used: {}\n\n", component));
        if usages.is_empty() {
            output.push_str("Not used by any product.\n");
            return;
        }
        self.render_edge_table(output, usages);
    }

    fn render_catalog(
        &self,
        output: &mut String,
        products: &[Item],
        components: &[Item],
        operations: &[String],
    ) {
        output.push_str("## Catalog\n\n");
        for (title, items) in [("Products", products), ("Components", components)] {
            output.push_str(&format!("### {} ({})\n\n", title, items.len()));
            for item in items {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        output.push_str(&format!("### Operations ({})\n\n", operations.len()));
        for operation in operations {
            output.push_str(&format!("- {}\n", operation));
        }
    }

    fn render_edge_table(&self, output: &mut String, edges: &[BomEdge]) {
        output.push_str(EDGE_TABLE_HEADER);
        output.push_str(EDGE_TABLE_SEPARATOR);
        for edge in edges {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                edge.id(),
                Self::item_cell(edge.product()),
                Self::item_cell(edge.component()),
                edge.quantity(),
                Self::operation_cell(edge.operation())
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Bill of Materials Report\n\n");
        self.render_metadata(&mut output, &response.metadata);

        match &response.report {
            AnalysisReport::Validation { results } => self.render_validation(&mut output, results),
            AnalysisReport::Expansion {
                product,
                production_quantity,
                lines,
            } => self.render_expansion(&mut output, product, *production_quantity, lines),
            AnalysisReport::Requirements {
                product,
                production_quantity,
                multi_level,
                requirements,
            } => self.render_requirements(
                &mut output,
                product,
                *production_quantity,
                *multi_level,
                requirements,
            ),
            AnalysisReport::WhereUsed { component, usages } => {
                self.render_where_used(&mut output, component, usages)
            }
            AnalysisReport::Catalog {
                products,
                components,
                operations,
            } => self.render_catalog(&mut output, products, components, operations),
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_analysis::domain::{BomIssue, ItemId, ValidationReport};

    fn edge(id: u64, product: (u64, &str), component: (u64, &str), quantity: f64) -> BomEdge {
        BomEdge::new(
            id,
            Item::new(product.0, product.1),
            Item::new(component.0, component.1),
            quantity,
            None,
        )
        .unwrap()
    }

    fn response(report: AnalysisReport) -> AnalysisResponse {
        AnalysisResponse::new(AnalysisMetadata::new("bom.json".to_string(), 2), report)
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let escaped = MarkdownFormatter::escape_markdown_table_cell("Bolt | M6\nzinc");
        assert_eq!(escaped, "Bolt \\| M6 zinc");
    }

    #[test]
    fn test_format_validation() {
        let report = AnalysisReport::Validation {
            results: vec![
                ProductValidation {
                    product: Item::new(1, "Table"),
                    report: ValidationReport::new(vec![]),
                },
                ProductValidation {
                    product: Item::new(2, "Chair"),
                    report: ValidationReport::new(vec![BomIssue::CircularDependency {
                        path: vec![ItemId::new(2), ItemId::new(3), ItemId::new(2)],
                    }]),
                },
            ],
        };

        let output = MarkdownFormatter::new().format(&response(report)).unwrap();
        assert!(output.starts_with("# Bill of Materials Report"));
        assert!(output.contains("| 1 (Table) | ✅ Valid | - |"));
        assert!(output.contains("| 2 (Chair) | ❌ Invalid | 1 |"));
        assert!(output.contains("- Circular dependency detected: 2 -> 3 -> 2"));
    }

    #[test]
    fn test_format_expansion_indents_levels() {
        let parent = edge(1, (1, "Table"), (2, "Top"), 1.0);
        let child = edge(2, (2, "Top"), (3, "Board"), 2.0);
        let report = AnalysisReport::Expansion {
            product: Item::new(1, "Table"),
            production_quantity: 5.0,
            lines: vec![
                ExpansionLine {
                    level: 1,
                    edge: parent,
                    required_quantity: 5.0,
                },
                ExpansionLine {
                    level: 2,
                    edge: child,
                    required_quantity: 10.0,
                },
            ],
        };

        let output = MarkdownFormatter::new().format(&response(report)).unwrap();
        assert!(output.contains("## Multi-level BOM of 1 (Table) (x5)"));
        assert!(output.contains("| 1 | 1 (Table) | 2 (Top) | 1 | 5 | - |"));
        assert!(output.contains("| 2 | 2 (Top) |   3 (Board) | 2 | 10 | - |"));
    }

    #[test]
    fn test_format_requirements() {
        let report = AnalysisReport::Requirements {
            product: Item::new(1, "Table"),
            production_quantity: 10.0,
            multi_level: false,
            requirements: vec![MaterialRequirement::new(
                Item::new(2, "Leg"),
                40.0,
                Some("Assemble".to_string()),
            )],
        };

        let output = MarkdownFormatter::new().format(&response(report)).unwrap();
        assert!(output.contains("## Material requirements for 1 (Table) (x10)"));
        assert!(output.contains("| 2 (Leg) | 40 | Assemble |"));
    }

    #[test]
    fn test_format_where_used_empty() {
        let report = AnalysisReport::WhereUsed {
            component: Item::unnamed(ItemId::new(9)),
            usages: vec![],
        };

        let output = MarkdownFormatter::new().format(&response(report)).unwrap();
        assert!(output.contains("## Where used: 9"));
        assert!(output.contains("Not used by any product."));
    }

    #[test]
    fn test_format_catalog() {
        let report = AnalysisReport::Catalog {
            products: vec![Item::new(1, "Table")],
            components: vec![Item::new(2, "Leg"), Item::new(3, "Top")],
            operations: vec!["Assemble".to_string()],
        };

        let output = MarkdownFormatter::new().format(&response(report)).unwrap();
        assert!(output.contains("### Products (1)"));
        assert!(output.contains("### Components (2)"));
        assert!(output.contains("- 3 (Top)"));
        assert!(output.contains("### Operations (1)\n\n- Assemble"));
    }
}
