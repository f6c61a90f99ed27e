//! Conversions from wire types to asset summaries.

use super::wire::{MarketCoin, SearchCoin, SearchResponse};
use super::{AssetSummary, ListedAsset, SearchedAsset};

impl From<MarketCoin> for ListedAsset {
    fn from(c: MarketCoin) -> Self {
        Self {
            id: c.id,
            name: c.name,
            symbol: c.symbol,
            image_url: c.image,
            current_price: c.current_price,
            price_change_percentage_24h: c.price_change_percentage_24h,
            market_cap: c.market_cap,
            market_cap_rank: c.market_cap_rank,
        }
    }
}

impl From<SearchCoin> for SearchedAsset {
    fn from(c: SearchCoin) -> Self {
        Self {
            id: c.id,
            name: c.name,
            symbol: c.symbol,
            thumb_url: c.thumb,
            market_cap_rank: c.market_cap_rank,
        }
    }
}

impl From<MarketCoin> for AssetSummary {
    fn from(c: MarketCoin) -> Self {
        AssetSummary::Listed(c.into())
    }
}

impl From<SearchCoin> for AssetSummary {
    fn from(c: SearchCoin) -> Self {
        AssetSummary::Searched(c.into())
    }
}

/// Ranked listing, order preserved.
pub(crate) fn listing_from_wire(coins: Vec<MarketCoin>) -> Vec<AssetSummary> {
    coins.into_iter().map(AssetSummary::from).collect()
}

/// Search matches, order preserved.
pub(crate) fn matches_from_wire(resp: SearchResponse) -> Vec<AssetSummary> {
    resp.coins.into_iter().map(AssetSummary::from).collect()
}
