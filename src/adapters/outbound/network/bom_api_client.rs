use super::super::bom_payload::parse_edges;
use crate::bom_analysis::domain::BomEdge;
use crate::ports::outbound::BomSource;
use crate::shared::error::BomError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Default request timeout for the BOM API
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// BomApiClient adapter reading edges from `GET {base_url}/billofmaterials`
///
/// A single attempt is made per fetch. Transport failures and non-2xx
/// statuses surface as [`BomError::SourceUnavailable`], undecodable bodies
/// as [`BomError::SourceParseError`].
pub struct BomApiClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl BomApiClient {
    /// Creates a client with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client for `base_url` whose requests give up after `timeout`
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Self::endpoint_for(base_url)?;

        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, endpoint })
    }

    fn endpoint_for(base_url: &str) -> Result<Url> {
        let joined = format!("{}/billofmaterials", base_url.trim().trim_end_matches('/'));
        let endpoint = Url::parse(&joined).map_err(|e| BomError::Validation {
            message: format!("invalid API URL '{}': {}", base_url, e),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(BomError::Validation {
                message: format!(
                    "invalid API URL '{}': only http and https are supported",
                    base_url
                ),
            }
            .into());
        }

        Ok(endpoint)
    }

    fn unavailable(&self, details: String) -> BomError {
        BomError::SourceUnavailable {
            source_name: self.describe(),
            details,
        }
    }
}

#[async_trait]
impl BomSource for BomApiClient {
    async fn fetch_edges(&self) -> Result<Vec<BomEdge>> {
        debug!(url = %self.endpoint, "requesting BOM records");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self
                .unavailable(format!("API returned status code {}", status))
                .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;

        let edges = parse_edges(&body, &self.describe())?;
        debug!(count = edges.len(), "received BOM records");
        Ok(edges)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
