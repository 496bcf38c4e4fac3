/// Network adapters for the BOM REST API
mod bom_api_client;

pub use bom_api_client::{BomApiClient, DEFAULT_TIMEOUT};
