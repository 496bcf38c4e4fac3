use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product or component as issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product or component entity embedded in a BOM record.
///
/// Only `id` and `name` are interpreted; any other fields the backend sends
/// are kept in `attributes` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    attributes: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: serde_json::Map::new(),
        }
    }

    /// Entity for an id whose record carried no embedded data
    pub fn unnamed(id: ItemId) -> Self {
        Self::new(id, String::new())
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.attributes
    }

    /// Name when known, otherwise `#<id>`
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("#{}", self.id)
        } else {
            self.name.clone()
        }
    }

    pub(crate) fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.id, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_keeps_extra_attributes() {
        let item: Item =
            serde_json::from_str(r#"{"id": 7, "name": "Bolt M6", "unit": "pcs", "cost": 0.12}"#)
                .unwrap();

        assert_eq!(item.id(), ItemId::new(7));
        assert_eq!(item.name(), "Bolt M6");
        assert_eq!(item.attributes().len(), 2);
        assert_eq!(item.attributes()["unit"], "pcs");
    }

    #[test]
    fn test_item_missing_name_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(item.name(), "");
        assert_eq!(item.display_name(), "#3");
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::new(5, "Frame").to_string(), "5 (Frame)");
        assert_eq!(Item::unnamed(ItemId::new(5)).to_string(), "5");
    }

    #[test]
    fn test_item_serialize_flattens_attributes() {
        let item = Item::new(1, "Chair").with_attribute("sku", serde_json::json!("CH-01"));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "name": "Chair", "sku": "CH-01"}));
    }
}
