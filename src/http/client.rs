//! Low-level HTTP client: `CoinGeckoHttp`.
//!
//! One method per upstream endpoint. Returns wire types (conversion to domain
//! types happens in the flows).

use crate::domain::asset::wire::{MarketCoin, MarketsQuery, SearchResponse};
use crate::domain::detail::wire::CoinDetailResponse;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::domain::price_history::HistoryWindow;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::AssetId;
use crate::source::MarketSource;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout (native only).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the public market-data REST API.
#[derive(Debug, Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, RetryPolicy::None)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ── Listing ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self, query: &MarketsQuery) -> Result<Vec<MarketCoin>, HttpError> {
        let url = format!("{}/coins/markets?{}", self.base_url, query.to_query_string());
        self.get(&url).await
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        let url = format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get(&url).await
    }

    // ── Detail ───────────────────────────────────────────────────────────

    pub async fn get_coin(&self, id: &AssetId) -> Result<CoinDetailResponse, HttpError> {
        let url = format!(
            "{}/coins/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        self.get(&url).await
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_market_chart_range(
        &self,
        id: &AssetId,
        vs_currency: &str,
        window: HistoryWindow,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart/range?vs_currency={}&from={}&to={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            urlencoding::encode(vs_currency),
            window.from,
            window.to
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let Some(config) = self.retry.config() else {
            return self.do_get(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if config.is_retryable(&e) && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();
        let body_text = resp.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(HttpError::Decode);
        }

        Err(HttpError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body_text,
        })
    }
}

impl MarketSource for CoinGeckoHttp {
    async fn markets(&self, query: &MarketsQuery) -> Result<Vec<MarketCoin>, HttpError> {
        self.get_markets(query).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        CoinGeckoHttp::search(self, query).await
    }

    async fn coin(&self, id: &AssetId) -> Result<CoinDetailResponse, HttpError> {
        self.get_coin(id).await
    }

    async fn market_chart_range(
        &self,
        id: &AssetId,
        vs_currency: &str,
        window: HistoryWindow,
    ) -> Result<MarketChartResponse, HttpError> {
        self.get_market_chart_range(id, vs_currency, window).await
    }
}
