use crate::bom_analysis::domain::BomEdge;
use crate::shared::error::BomError;
use crate::shared::Result;
use serde_json::Value;

/// Decodes a `/billofmaterials` payload into edges.
///
/// Both a bare JSON array and an object wrapping the array under `data` are
/// accepted; anything else is a [`BomError::SourceParseError`].
pub(crate) fn parse_edges(text: &str, source_name: &str) -> Result<Vec<BomEdge>> {
    let parse_error = |details: String| BomError::SourceParseError {
        source_name: source_name.to_string(),
        details,
    };

    let value: Value = serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?;
    let records = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut object) => object
            .remove("data")
            .filter(Value::is_array)
            .ok_or_else(|| parse_error("object payload has no \"data\" array".to_string()))?,
        other => {
            return Err(parse_error(format!(
                "expected an array or an object, found {}",
                json_kind(&other)
            ))
            .into())
        }
    };

    let edges: Vec<BomEdge> =
        serde_json::from_value(records).map_err(|e| parse_error(e.to_string()))?;
    Ok(edges)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
