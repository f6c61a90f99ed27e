//! Asset detail domain: full metadata for the selected asset and the
//! presentation surface that shows it.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::{PresentationSurface, SurfaceState};

/// Full metadata of one asset, resolved on selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetail {
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_rank: Option<u32>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingMarketData,
    MissingImage,
    MissingPrice(String),
    MissingMarketCap(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                write!(f, "Asset detail validation errors ({id}): ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingMarketData => write!(f, "Missing market data"),
            ValidationError::MissingImage => write!(f, "Missing image"),
            ValidationError::MissingPrice(vs) => write!(f, "Missing current price in {vs}"),
            ValidationError::MissingMarketCap(vs) => write!(f, "Missing market cap in {vs}"),
        }
    }
}

impl std::error::Error for ValidationError {}
