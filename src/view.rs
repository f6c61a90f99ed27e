//! Read-only render model derived from [`ExplorerState`].
//!
//! Everything here is plain text and flags; a rendering layer can draw it
//! without knowing where a record came from or which flow failed.

use crate::domain::asset::AssetSummary;
use crate::domain::detail::SurfaceState;
use crate::domain::price_history::ChartSeries;
use crate::shared::fmt::num;
use crate::state::{AsyncError, ExplorerState, Flow};
use serde::Serialize;

/// Direction of the 24h change, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTone {
    Up,
    Down,
    NotApplicable,
}

impl ChangeTone {
    pub fn of(change: Option<f64>) -> Self {
        match change {
            Some(c) if c >= 0.0 => ChangeTone::Up,
            Some(_) => ChangeTone::Down,
            None => ChangeTone::NotApplicable,
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRow {
    /// 1-based position in the display result set.
    pub position: usize,
    pub id: String,
    /// `Name (SYMBOL)`
    pub title: String,
    pub icon_url: String,
    pub price: String,
    pub change: String,
    pub tone: ChangeTone,
    pub rank: String,
}

impl AssetRow {
    pub fn from_summary(index: usize, asset: &AssetSummary) -> Self {
        let change = asset.price_change_percentage_24h();
        Self {
            position: index + 1,
            id: asset.id().to_string(),
            title: format!("{} ({})", asset.name(), asset.symbol().to_uppercase()),
            icon_url: asset.image_url().to_string(),
            price: num::usd_or_na(asset.current_price()),
            change: num::percent_or_na(change),
            tone: ChangeTone::of(change),
            rank: asset
                .market_cap_rank()
                .map(|r| r.to_string())
                .unwrap_or_else(|| num::NOT_APPLICABLE.to_string()),
        }
    }
}

/// Banner text for an error slot.
pub fn banner_text(error: &AsyncError) -> String {
    format!("Error fetching data: {}", error.message)
}

/// What the listing area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingView {
    /// A failed listing load replaces the table entirely.
    Banner { text: String },
    /// Rows, with an optional banner above them for search/selection errors.
    Table {
        banner: Option<String>,
        rows: Vec<AssetRow>,
    },
}

impl ListingView {
    pub fn from_state(state: &ExplorerState) -> Self {
        if let Some(err) = state.error().filter(|e| e.flow == Flow::Listing) {
            return ListingView::Banner {
                text: banner_text(err),
            };
        }

        let banner = state.error().map(banner_text);
        let rows = state
            .board()
            .results()
            .iter()
            .enumerate()
            .map(|(i, asset)| AssetRow::from_summary(i, asset))
            .collect();
        ListingView::Table { banner, rows }
    }
}

/// What the presentation surface shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceView {
    Hidden,
    Loading,
    Ready {
        title: String,
        image_url: String,
        price: String,
        market_cap: String,
        change: String,
        tone: ChangeTone,
        /// Absent until history resolves.
        chart: Option<ChartSeries>,
    },
}

impl SurfaceView {
    pub fn from_state(state: &ExplorerState) -> Self {
        let surface = state.surface();
        match surface.state() {
            SurfaceState::Closed => SurfaceView::Hidden,
            SurfaceState::Loading => SurfaceView::Loading,
            SurfaceState::DetailReady | SurfaceState::DetailAndChartReady => {
                let Some(detail) = surface.detail() else {
                    return SurfaceView::Loading;
                };
                SurfaceView::Ready {
                    title: format!("{} ({})", detail.name, detail.symbol.to_uppercase()),
                    image_url: detail.image_url.clone(),
                    price: num::usd(detail.current_price),
                    market_cap: num::usd_whole(detail.market_cap),
                    change: num::percent_or_na(detail.price_change_percentage_24h),
                    tone: ChangeTone::of(detail.price_change_percentage_24h),
                    chart: surface.chart().cloned(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::{ListedAsset, SearchedAsset};
    use crate::domain::detail::AssetDetail;
    use crate::error::SdkError;

    fn listed() -> AssetSummary {
        AssetSummary::Listed(ListedAsset {
            id: "bitcoin".into(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            image_url: "https://img/btc-large.png".to_string(),
            current_price: Some(43000.5),
            price_change_percentage_24h: Some(-1.234),
            market_cap: Some(840_000_000_000.0),
            market_cap_rank: Some(1),
        })
    }

    fn searched() -> AssetSummary {
        AssetSummary::Searched(SearchedAsset {
            id: "dogecoin".into(),
            name: "Dogecoin".to_string(),
            symbol: "doge".to_string(),
            thumb_url: "https://img/doge-thumb.png".to_string(),
            market_cap_rank: None,
        })
    }

    #[test]
    fn test_listed_row() {
        let row = AssetRow::from_summary(0, &listed());
        assert_eq!(row.position, 1);
        assert_eq!(row.title, "Bitcoin (BTC)");
        assert_eq!(row.icon_url, "https://img/btc-large.png");
        assert_eq!(row.price, "$43,000.50");
        assert_eq!(row.change, "-1.23%");
        assert_eq!(row.tone, ChangeTone::Down);
        assert_eq!(row.rank, "1");
    }

    #[test]
    fn test_search_row_renders_not_applicable() {
        let row = AssetRow::from_summary(4, &searched());
        assert_eq!(row.position, 5);
        assert_eq!(row.icon_url, "https://img/doge-thumb.png");
        assert_eq!(row.price, "N/A");
        assert_eq!(row.change, "N/A");
        assert_eq!(row.tone, ChangeTone::NotApplicable);
        assert_eq!(row.rank, "N/A");
    }

    #[test]
    fn test_zero_change_is_up() {
        assert_eq!(ChangeTone::of(Some(0.0)), ChangeTone::Up);
    }

    #[test]
    fn test_listing_error_replaces_table() {
        let mut state = ExplorerState::new();
        state.report(Flow::Listing, &SdkError::Other("boom".to_string()));
        assert_eq!(
            ListingView::from_state(&state),
            ListingView::Banner {
                text: "Error fetching data: boom".to_string()
            }
        );
    }

    #[test]
    fn test_search_error_keeps_rows() {
        let mut state = ExplorerState::new();
        state.board.seed(vec![listed()], 0);
        state.report(Flow::Search, &SdkError::Other("timeout".to_string()));
        match ListingView::from_state(&state) {
            ListingView::Table { banner, rows } => {
                assert_eq!(banner.as_deref(), Some("Error fetching data: timeout"));
                assert_eq!(rows.len(), 1);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_surface_views() {
        let mut state = ExplorerState::new();
        assert_eq!(SurfaceView::from_state(&state), SurfaceView::Hidden);

        let g = state.surface.open("bitcoin".into());
        assert_eq!(SurfaceView::from_state(&state), SurfaceView::Loading);

        state.surface.resolve_detail(
            g,
            AssetDetail {
                id: "bitcoin".into(),
                name: "Bitcoin".to_string(),
                symbol: "btc".to_string(),
                image_url: "https://img/btc.png".to_string(),
                current_price: 43000.5,
                market_cap: 840_123_456_789.4,
                price_change_percentage_24h: None,
                market_cap_rank: Some(1),
            },
        );
        match SurfaceView::from_state(&state) {
            SurfaceView::Ready {
                title,
                price,
                market_cap,
                change,
                chart,
                ..
            } => {
                assert_eq!(title, "Bitcoin (BTC)");
                assert_eq!(price, "$43,000.50");
                assert_eq!(market_cap, "$840,123,456,789");
                assert_eq!(change, "N/A");
                assert!(chart.is_none());
            }
            other => panic!("expected ready, got {other:?}"),
        }

        state.surface.close();
        assert_eq!(SurfaceView::from_state(&state), SurfaceView::Hidden);
    }
}
