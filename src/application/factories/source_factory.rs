use crate::adapters::outbound::filesystem::JsonFileBomSource;
use crate::adapters::outbound::network::BomApiClient;
use crate::ports::outbound::BomSource;
use crate::shared::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Where BOM edges are loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    File(PathBuf),
    Api { base_url: String, timeout: Duration },
}

/// Factory for creating BOM sources
pub struct SourceFactory;

impl SourceFactory {
    /// Creates the source adapter for `source_type`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the URL is invalid
    pub fn create(source_type: SourceType) -> Result<Box<dyn BomSource>> {
        Ok(match source_type {
            SourceType::File(path) => Box::new(JsonFileBomSource::new(path)),
            SourceType::Api { base_url, timeout } => {
                Box::new(BomApiClient::with_timeout(&base_url, timeout)?)
            }
        })
    }
}
