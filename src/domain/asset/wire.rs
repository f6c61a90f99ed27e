//! Wire types for the ranked-listing and search endpoints (REST).

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};

/// One record from `GET /coins/markets`.
///
/// Pricing fields are optional because the upstream sends `null` for assets
/// without recent trades.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketCoin {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// One coin match from `GET /search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCoin {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
}

/// Response body of `GET /search`. Only the `coins` section is consumed;
/// exchanges, categories and NFTs are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
}

/// Query parameters for `GET /coins/markets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketsQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    /// Top 10 by market cap, first page, no sparkline.
    fn default() -> Self {
        Self {
            vs_currency: crate::network::DEFAULT_VS_CURRENCY.to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 10,
            page: 1,
            sparkline: false,
        }
    }
}

impl MarketsQuery {
    pub fn to_query_string(&self) -> String {
        format!(
            "vs_currency={}&order={}&per_page={}&page={}&sparkline={}",
            urlencoding::encode(&self.vs_currency),
            urlencoding::encode(&self.order),
            self.per_page,
            self.page,
            self.sparkline
        )
    }
}
