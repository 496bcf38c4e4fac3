#![allow(dead_code)]

pub mod mocks;

use bom_graph::prelude::*;

/// Edge whose items are named "Item {id}"
pub fn edge(id: u64, product: u64, component: u64, quantity: f64, operation: Option<&str>) -> BomEdge {
    BomEdge::new(
        id,
        Item::new(product, format!("Item {}", product)),
        Item::new(component, format!("Item {}", component)),
        quantity,
        operation.map(str::to_string),
    )
    .unwrap()
}
