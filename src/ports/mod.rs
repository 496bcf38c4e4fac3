/// Ports: the interfaces the application core depends on.
///
/// Adapters in `crate::adapters` implement these traits; tests substitute
/// in-memory mocks.
pub mod outbound;
