mod bom_store;

pub use bom_store::{BomStore, StaleDataPolicy};
