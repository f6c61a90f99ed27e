//! Wire types for the single-asset detail endpoint (REST).

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Image variants of an asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageSet {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Market data block, keyed by quote currency (`"usd"`, `"eur"`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default)]
    pub current_price: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Response body of `GET /coins/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: ImageSet,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub market_data: Option<MarketDataResponse>,
}
