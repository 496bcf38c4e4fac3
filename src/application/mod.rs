/// Application layer - store, use cases and DTOs
///
/// This layer orchestrates the BOM analysis services and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod store;
pub mod use_cases;
