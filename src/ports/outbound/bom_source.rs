use crate::bom_analysis::domain::BomEdge;
use crate::shared::Result;
use async_trait::async_trait;

/// BomSource port for loading the complete BOM edge list
///
/// A source always returns the whole collection; there is no filtering or
/// pagination at this layer. Implementations must be `Send + Sync` so a store
/// can be moved across tasks.
#[async_trait]
pub trait BomSource: Send + Sync {
    /// Fetches every BOM edge, in the order the backend returns them
    ///
    /// # Errors
    /// Returns an error if:
    /// - The backend cannot be reached or answers with a non-success status
    /// - The payload is not a list of BOM records
    async fn fetch_edges(&self) -> Result<Vec<BomEdge>>;

    /// Short description of where the edges come from (URL or path)
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: BomSource + ?Sized> BomSource for Box<T> {
    async fn fetch_edges(&self) -> Result<Vec<BomEdge>> {
        (**self).fetch_edges().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
