//! Detail sub-client: selection, detail + history resolution, close.

use super::AssetDetail;
use crate::client::CoinExplorer;
use crate::domain::price_history::{ChartSeries, HistoryWindow};
use crate::error::SdkError;
use crate::shared::AssetId;
use crate::source::MarketSource;
use crate::state::{Flow, FlowOutcome};

/// Sub-client driving the presentation surface.
pub struct DetailResolver<'a, S> {
    pub(crate) client: &'a CoinExplorer<S>,
}

impl<'a, S: MarketSource> DetailResolver<'a, S> {
    /// Select an asset: open the surface in its loading state, fetch detail,
    /// then fetch the trailing 30-day history and attach the chart.
    ///
    /// The history request is only issued once detail has been stored. A
    /// failure at either step records the error and leaves the surface where
    /// it is. If another selection starts meanwhile, this one's remaining
    /// results are dropped.
    pub async fn select(&self, id: &str) -> FlowOutcome {
        let id = AssetId::from(id);
        let generation = self.client.state.write().await.surface.open(id.clone());
        tracing::debug!(asset = %id, "Asset selected");

        // Step 1: detail
        let result = self.client.source.coin(&id).await;
        {
            let mut state = self.client.state.write().await;
            if !state.surface.is_current(generation) {
                tracing::debug!(asset = %id, "Discarding detail of superseded selection");
                return FlowOutcome::Discarded;
            }

            let detail = result.map_err(SdkError::from).and_then(|resp| {
                AssetDetail::try_from((resp, self.client.config.vs_currency.as_str()))
                    .map_err(|e| SdkError::Validation(e.to_string()))
            });
            match detail {
                Ok(detail) => {
                    state.surface.resolve_detail(generation, detail);
                    state.clear_error(Flow::Selection);
                    tracing::info!(asset = %id, "Asset detail resolved");
                }
                Err(e) => {
                    state.report(Flow::Selection, &e);
                    return FlowOutcome::Failed;
                }
            }
        }

        // Step 2: history, windowed on the moment detail arrived
        let window = HistoryWindow::ending_now();
        let result = self
            .client
            .source
            .market_chart_range(&id, &self.client.config.vs_currency, window)
            .await;

        let mut state = self.client.state.write().await;
        if !state.surface.is_current(generation) {
            tracing::debug!(asset = %id, "Discarding history of superseded selection");
            return FlowOutcome::Discarded;
        }

        let chart = result.map_err(SdkError::from).and_then(|resp| {
            ChartSeries::try_from(resp).map_err(|e| SdkError::Validation(e.to_string()))
        });
        match chart {
            Ok(chart) => {
                tracing::info!(asset = %id, points = chart.len(), "Price history resolved");
                state.surface.resolve_chart(generation, chart);
                state.clear_error(Flow::Selection);
                FlowOutcome::Applied
            }
            Err(e) => {
                state.report(Flow::Selection, &e);
                FlowOutcome::Failed
            }
        }
    }

    /// Hide the surface. Detail and chart are kept until the next selection.
    pub async fn close(&self) {
        self.client.state.write().await.surface.close();
    }
}
