//! # coinview
//!
//! Asset discovery and price-history core for a market explorer: a ranked
//! listing, search-on-submit, and a detail surface with a 30-day price chart.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Newtypes, domain models, display formatting (always available)
//! 2. **Source**: `MarketSource`, the seam between flows and the upstream API
//! 3. **HTTP API**: `CoinGeckoHttp` with opt-in retry policies
//! 4. **High-Level Client**: `CoinExplorer` with one sub-client per flow and a
//!    shared display model
//! 5. **View**: Read-only render model for a UI layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinview::prelude::*;
//!
//! let explorer = CoinExplorer::builder().build()?;
//!
//! explorer.activate().await;
//! explorer.submit_search("doge").await;
//! explorer.select_asset("dogecoin").await;
//!
//! let state = explorer.snapshot().await;
//! let list = ListingView::from_state(&state);
//! let surface = SurfaceView::from_state(&state);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Display model written by the flows.
pub mod state;

// ── Layer 2: Source ──────────────────────────────────────────────────────────

/// `MarketSource` trait.
pub mod source;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinExplorer`: the primary entry point.
pub mod client;

// ── Layer 5: View ────────────────────────────────────────────────────────────

/// Render model derived from the display model.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::AssetId;

    // Domain types: asset
    pub use crate::domain::asset::state::ListingStatus;
    pub use crate::domain::asset::{AssetBoard, AssetSummary, ListedAsset, SearchedAsset};

    // Domain types: detail, price history
    pub use crate::domain::detail::state::SurfacePhase;
    pub use crate::domain::detail::{AssetDetail, PresentationSurface, SurfaceState};
    pub use crate::domain::price_history::{ChartDataset, ChartSeries, HistoryWindow, PricePoint};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_VS_CURRENCY};

    // State
    pub use crate::state::{AsyncError, ExplorerState, Flow, FlowOutcome};

    // Source + client
    pub use crate::client::{
        CoinExplorer, DetailClient, ExplorerConfig, ListingClient, SearchClient,
    };
    pub use crate::source::MarketSource;
    #[cfg(feature = "http")]
    pub use crate::client::{CoinExplorerBuilder, HttpExplorer};
    #[cfg(feature = "http")]
    pub use crate::http::{CoinGeckoHttp, RetryConfig, RetryPolicy};

    // View
    pub use crate::view::{AssetRow, ChangeTone, ListingView, SurfaceView};
}
