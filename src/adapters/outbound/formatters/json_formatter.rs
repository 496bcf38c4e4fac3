use crate::application::dto::AnalysisResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the response as pretty-printed JSON
///
/// Edges keep their wire field names (`productId`, `createdAt`, ...) so a
/// report can be fed back to tools that consume `/billofmaterials`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut json = serde_json::to_string_pretty(response)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{AnalysisMetadata, AnalysisReport};
    use crate::bom_analysis::domain::{BomEdge, Item};

    #[test]
    fn test_format_where_used() {
        let edge = BomEdge::new(7, Item::new(1, "Table"), Item::new(2, "Leg"), 4.0, None).unwrap();
        let response = AnalysisResponse::new(
            AnalysisMetadata::new("bom.json".to_string(), 1),
            AnalysisReport::WhereUsed {
                component: Item::new(2, "Leg"),
                usages: vec![edge],
            },
        );

        let output = JsonFormatter::new().format(&response).unwrap();
        assert!(output.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["metadata"]["source"], "bom.json");
        assert_eq!(value["report"]["kind"], "whereUsed");
        assert_eq!(value["report"]["usages"][0]["productId"], 1);
        assert_eq!(value["report"]["usages"][0]["quantity"], 4.0);
    }
}
