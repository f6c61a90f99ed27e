//! Wire types for historical price ranges (REST).

use serde::{Deserialize, Serialize};

/// One `[epochMillis, price]` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair(pub f64, pub f64);

/// Response body of `GET /coins/{id}/market_chart/range`.
///
/// Market caps and volumes arrive in the same shape and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<PricePair>,
}
