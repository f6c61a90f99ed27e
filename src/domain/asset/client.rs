//! Listing and search sub-clients: ranked listing load, search-on-submit.

use super::convert::{listing_from_wire, matches_from_wire};
use crate::client::CoinExplorer;
use crate::error::SdkError;
use crate::source::MarketSource;
use crate::state::{Flow, FlowOutcome};

/// Sub-client for the ranked listing.
pub struct Listing<'a, S> {
    pub(crate) client: &'a CoinExplorer<S>,
}

impl<'a, S: MarketSource> Listing<'a, S> {
    /// Fetch the ranked page and store it as both the canonical dataset and
    /// the display result set.
    ///
    /// Skipped while a load is in flight or once one has succeeded. On failure
    /// the display stays empty and the error slot is set.
    pub async fn load(&self) -> FlowOutcome {
        let issued_at = {
            let mut state = self.client.state.write().await;
            match state.board.begin_listing() {
                Some(generation) => generation,
                None => return FlowOutcome::Skipped,
            }
        };

        let query = &self.client.config.listing_query;
        let result = self.client.source.markets(query).await;

        let mut state = self.client.state.write().await;
        match result {
            Ok(coins) => {
                let listing = listing_from_wire(coins);
                let count = listing.len();
                let displayed = state.board.seed(listing, issued_at);
                state.clear_error(Flow::Listing);
                tracing::info!(count, displayed, "Listing loaded");
                FlowOutcome::Applied
            }
            Err(e) => {
                state.board.listing_failed();
                state.report(Flow::Listing, &SdkError::from(e));
                FlowOutcome::Failed
            }
        }
    }
}

/// Sub-client for search-on-submit.
pub struct Search<'a, S> {
    pub(crate) client: &'a CoinExplorer<S>,
}

impl<'a, S: MarketSource> Search<'a, S> {
    /// Handle a submitted query.
    ///
    /// A blank query restores the canonical dataset without a request. Any
    /// other text is sent as-is; the matches replace the display result set
    /// unless a newer submission was made meanwhile. On failure the display is
    /// left untouched.
    pub async fn submit(&self, text: &str) -> FlowOutcome {
        let generation = {
            let mut state = self.client.state.write().await;
            if text.trim().is_empty() {
                state.board.restore_canonical();
                tracing::debug!(
                    count = state.board.results().len(),
                    "Blank query, restored listing"
                );
                return FlowOutcome::Applied;
            }
            state.board.begin_search()
        };

        let result = self.client.source.search(text).await;

        let mut state = self.client.state.write().await;
        if !state.board.is_current(generation) {
            tracing::debug!(query = text, "Discarding superseded search response");
            return FlowOutcome::Discarded;
        }

        match result {
            Ok(resp) => {
                let matches = matches_from_wire(resp);
                tracing::info!(query = text, count = matches.len(), "Search results");
                state.board.apply_search(generation, matches);
                state.clear_error(Flow::Search);
                FlowOutcome::Applied
            }
            Err(e) => {
                state.report(Flow::Search, &SdkError::from(e));
                FlowOutcome::Failed
            }
        }
    }
}
