use crate::bom_analysis::domain::BomRepository;
use crate::ports::outbound::BomSource;
use serde::Deserialize;
use tracing::{info, warn};

/// What happens to the resident snapshot when a fetch fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleDataPolicy {
    /// Keep serving the last successfully loaded edges
    #[default]
    Keep,
    /// Drop the snapshot so queries see an empty BOM
    Clear,
}

impl std::str::FromStr for StaleDataPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(StaleDataPolicy::Keep),
            "clear" => Ok(StaleDataPolicy::Clear),
            _ => Err(format!(
                "Invalid stale data policy: {}. Please specify 'keep' or 'clear'",
                s
            )),
        }
    }
}

/// BomStore owning the BOM snapshot and the source it is loaded from.
///
/// The store is passed explicitly to whoever needs BOM data; there is no
/// shared global instance. A fetch needs `&mut self`, so one store has at
/// most one request in flight and readers never observe a half-replaced
/// snapshot.
///
/// Transport failures never escape `fetch`: they are turned into a readable
/// message kept in [`BomStore::error`]. No retry is attempted; callers fetch
/// again explicitly.
pub struct BomStore<S> {
    source: S,
    repository: BomRepository,
    error: Option<String>,
    failure: Option<anyhow::Error>,
    loaded: bool,
    policy: StaleDataPolicy,
}

impl<S: BomSource> BomStore<S> {
    pub fn new(source: S) -> Self {
        Self::with_policy(source, StaleDataPolicy::default())
    }

    pub fn with_policy(source: S, policy: StaleDataPolicy) -> Self {
        Self {
            source,
            repository: BomRepository::empty(),
            error: None,
            failure: None,
            loaded: false,
            policy,
        }
    }

    /// Loads the full edge list from the source, replacing the snapshot.
    ///
    /// Returns `true` on success. On failure the error message is stored and
    /// the snapshot is kept or cleared according to the [`StaleDataPolicy`].
    pub async fn fetch(&mut self) -> bool {
        match self.source.fetch_edges().await {
            Ok(edges) => {
                info!(source = %self.source.describe(), edges = edges.len(), "loaded BOM edges");
                self.repository = BomRepository::new(edges);
                self.error = None;
                self.failure = None;
                self.loaded = true;
                true
            }
            Err(e) => {
                let message = format!("Failed to fetch BOM data: {:#}", e);
                warn!(source = %self.source.describe(), error = %message, "BOM fetch failed");
                self.error = Some(message);
                self.failure = Some(e);
                if self.policy == StaleDataPolicy::Clear {
                    self.repository = BomRepository::empty();
                    self.loaded = false;
                }
                false
            }
        }
    }

    /// Discards the snapshot and any stored error
    pub fn reset(&mut self) {
        self.repository = BomRepository::empty();
        self.error = None;
        self.failure = None;
        self.loaded = false;
    }

    pub fn repository(&self) -> &BomRepository {
        &self.repository
    }

    /// Message from the most recent failed fetch, cleared by a successful one
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Takes the typed error of the most recent failed fetch.
    ///
    /// [`BomStore::error`] keeps its message after this is taken.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    /// Whether the resident snapshot came from a successful fetch
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn policy(&self) -> StaleDataPolicy {
        self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
