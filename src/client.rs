//! High-level client: `CoinExplorer` with nested sub-client accessors.
//!
//! Each flow has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared display model, and the accessors.

use crate::domain::asset::client::{Listing, Search};
use crate::domain::asset::wire::MarketsQuery;
use crate::domain::detail::client::DetailResolver;
use crate::source::MarketSource;
use crate::state::{ExplorerState, FlowOutcome};

use async_lock::RwLock;
use std::sync::Arc;

#[cfg(feature = "http")]
use crate::http::{CoinGeckoHttp, RetryPolicy};
#[cfg(feature = "http")]
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Listing as ListingClient;
pub use crate::domain::asset::client::Search as SearchClient;
pub use crate::domain::detail::client::DetailResolver as DetailClient;

/// Settings shared by the flows.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Quote currency for detail prices and history ranges.
    pub vs_currency: String,
    /// Parameters of the ranked listing request.
    pub listing_query: MarketsQuery,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            vs_currency: crate::network::DEFAULT_VS_CURRENCY.to_string(),
            listing_query: MarketsQuery::default(),
        }
    }
}

/// The primary entry point: drives the listing, search, and detail flows and
/// owns the display model they write to.
///
/// Flows take `&self`, so several may be in flight at once; each one writes
/// only its own slot of [`ExplorerState`].
pub struct CoinExplorer<S> {
    pub(crate) source: S,
    pub(crate) state: Arc<RwLock<ExplorerState>>,
    pub(crate) config: ExplorerConfig,
}

/// Explorer backed by the public REST API.
#[cfg(feature = "http")]
pub type HttpExplorer = CoinExplorer<CoinGeckoHttp>;

#[cfg(feature = "http")]
impl HttpExplorer {
    pub fn builder() -> CoinExplorerBuilder {
        CoinExplorerBuilder::default()
    }
}

impl<S: MarketSource> CoinExplorer<S> {
    /// Build over any market source, with default settings.
    pub fn with_source(source: S) -> Self {
        Self::with_source_and_config(source, ExplorerConfig::default())
    }

    pub fn with_source_and_config(source: S, config: ExplorerConfig) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(ExplorerState::new())),
            config,
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn listing(&self) -> Listing<'_, S> {
        Listing { client: self }
    }

    pub fn search(&self) -> Search<'_, S> {
        Search { client: self }
    }

    pub fn detail(&self) -> DetailResolver<'_, S> {
        DetailResolver { client: self }
    }

    // ── Rendering-layer callbacks ────────────────────────────────────────

    /// Load the ranked listing. Runs once per explorer.
    pub async fn activate(&self) -> FlowOutcome {
        self.listing().load().await
    }

    pub async fn submit_search(&self, text: &str) -> FlowOutcome {
        self.search().submit(text).await
    }

    pub async fn select_asset(&self, id: &str) -> FlowOutcome {
        self.detail().select(id).await
    }

    pub async fn close_surface(&self) {
        self.detail().close().await
    }

    // ── Read access ──────────────────────────────────────────────────────

    /// A copy of the current display model.
    pub async fn snapshot(&self) -> ExplorerState {
        self.state.read().await.clone()
    }

    /// Shared handle to the display model, for renderers that hold it.
    pub fn state(&self) -> Arc<RwLock<ExplorerState>> {
        self.state.clone()
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: Clone> Clone for CoinExplorer<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            state: self.state.clone(),
            config: self.config.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
pub struct CoinExplorerBuilder {
    base_url: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
    config: ExplorerConfig,
}

#[cfg(feature = "http")]
impl Default for CoinExplorerBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: crate::http::client::DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::None,
            config: ExplorerConfig::default(),
        }
    }
}

#[cfg(feature = "http")]
impl CoinExplorerBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Requests are attempted once unless a retry policy is set here.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Quote currency for listing, detail, and history. Defaults to `usd`.
    pub fn vs_currency(mut self, currency: &str) -> Self {
        self.config.vs_currency = currency.to_string();
        self.config.listing_query.vs_currency = currency.to_string();
        self
    }

    pub fn listing_query(mut self, query: MarketsQuery) -> Self {
        self.config.listing_query = query;
        self
    }

    pub fn build(self) -> Result<HttpExplorer, crate::error::SdkError> {
        let http = CoinGeckoHttp::with_options(&self.base_url, self.timeout, self.retry_policy)?;
        Ok(CoinExplorer::with_source_and_config(http, self.config))
    }
}
