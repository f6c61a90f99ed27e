//! The seam between the flows and the upstream market-data API.

use crate::domain::asset::wire::{MarketCoin, MarketsQuery, SearchResponse};
use crate::domain::detail::wire::CoinDetailResponse;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::domain::price_history::HistoryWindow;
use crate::error::HttpError;
use crate::shared::AssetId;
use std::future::Future;

/// Read-only access to ranked listings, search, asset detail, and price ranges.
///
/// Implemented by [`CoinGeckoHttp`](crate::http::CoinGeckoHttp); tests supply
/// scripted implementations. Every method returns wire types; conversion to
/// domain types happens in the flows.
pub trait MarketSource: Send + Sync {
    /// `GET /coins/markets`
    fn markets(
        &self,
        query: &MarketsQuery,
    ) -> impl Future<Output = Result<Vec<MarketCoin>, HttpError>> + Send;

    /// `GET /search?query=`
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResponse, HttpError>> + Send;

    /// `GET /coins/{id}`
    fn coin(&self, id: &AssetId)
        -> impl Future<Output = Result<CoinDetailResponse, HttpError>> + Send;

    /// `GET /coins/{id}/market_chart/range`
    fn market_chart_range(
        &self,
        id: &AssetId,
        vs_currency: &str,
        window: HistoryWindow,
    ) -> impl Future<Output = Result<MarketChartResponse, HttpError>> + Send;
}
