//! Asset domain: ranked listing and search results, display result set.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};

pub use state::AssetBoard;

// ─── Provenance ──────────────────────────────────────────────────────────────

/// An asset from the ranked-markets endpoint, carrying pricing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedAsset {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
}

/// An asset from the search endpoint: identity and thumbnail only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchedAsset {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub thumb_url: String,
    pub market_cap_rank: Option<u32>,
}

// ─── AssetSummary ────────────────────────────────────────────────────────────

/// One row of the display result set, tagged by where it came from.
///
/// Pricing accessors return `None` for search-origin records; callers render
/// that as "not applicable", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum AssetSummary {
    Listed(ListedAsset),
    Searched(SearchedAsset),
}

impl AssetSummary {
    pub fn id(&self) -> &AssetId {
        match self {
            AssetSummary::Listed(a) => &a.id,
            AssetSummary::Searched(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AssetSummary::Listed(a) => &a.name,
            AssetSummary::Searched(a) => &a.name,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            AssetSummary::Listed(a) => &a.symbol,
            AssetSummary::Searched(a) => &a.symbol,
        }
    }

    /// Full image for listing records, thumbnail for search records.
    pub fn image_url(&self) -> &str {
        match self {
            AssetSummary::Listed(a) => &a.image_url,
            AssetSummary::Searched(a) => &a.thumb_url,
        }
    }

    pub fn current_price(&self) -> Option<f64> {
        match self {
            AssetSummary::Listed(a) => a.current_price,
            AssetSummary::Searched(_) => None,
        }
    }

    pub fn price_change_percentage_24h(&self) -> Option<f64> {
        match self {
            AssetSummary::Listed(a) => a.price_change_percentage_24h,
            AssetSummary::Searched(_) => None,
        }
    }

    pub fn market_cap_rank(&self) -> Option<u32> {
        match self {
            AssetSummary::Listed(a) => a.market_cap_rank,
            AssetSummary::Searched(a) => a.market_cap_rank,
        }
    }

    pub fn is_search_result(&self) -> bool {
        matches!(self, AssetSummary::Searched(_))
    }
}
