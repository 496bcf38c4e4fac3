/// Crate-wide result type; errors are carried as `anyhow::Error` so typed
/// `BomError` values and ad-hoc context can travel through the same channel.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
