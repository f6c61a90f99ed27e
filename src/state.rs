//! Display model shared by the three flows.
//!
//! Each flow owns its slot: the listing loader and search controller write the
//! [`AssetBoard`], the detail resolver writes the [`PresentationSurface`]. The
//! error slot is shared; the most recent failure wins, tagged with its flow.

use crate::domain::asset::AssetBoard;
use crate::domain::detail::PresentationSurface;
use crate::error::SdkError;
use std::fmt;

/// Which flow produced a result or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Listing,
    Search,
    Selection,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Listing => "listing",
            Flow::Search => "search",
            Flow::Selection => "selection",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Most recent failure of any flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncError {
    pub flow: Flow,
    pub message: String,
}

impl fmt::Display for AsyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// How a flow invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The result was written to the display model.
    Applied,
    /// A newer request of the same flow was issued first; nothing was written.
    Discarded,
    /// The failure was recorded in the error slot.
    Failed,
    /// Nothing to do (e.g. the listing is already loaded or loading).
    Skipped,
}

/// Everything the rendering layer reads.
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    pub(crate) board: AssetBoard,
    pub(crate) surface: PresentationSurface,
    pub(crate) error: Option<AsyncError>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &AssetBoard {
        &self.board
    }

    pub fn surface(&self) -> &PresentationSurface {
        &self.surface
    }

    pub fn error(&self) -> Option<&AsyncError> {
        self.error.as_ref()
    }

    /// Record a failure, replacing whatever error was there.
    pub(crate) fn report(&mut self, flow: Flow, err: &SdkError) {
        tracing::warn!(flow = flow.as_str(), "Fetch error: {}", err);
        self.error = Some(AsyncError {
            flow,
            message: err.to_string(),
        });
    }

    /// Any successful fetch clears the slot, whichever flow failed last.
    pub(crate) fn clear_error(&mut self, flow: Flow) {
        if let Some(previous) = self.error.take() {
            tracing::debug!(
                flow = flow.as_str(),
                cleared = previous.flow.as_str(),
                "Error cleared by successful fetch"
            );
        }
    }
}
