/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: BOM sources, report
/// formatters, presenters and the console progress reporter.
pub mod outbound;
