//! Presentation surface state machine.
//!
//! ```text
//! Closed ──select──▶ Loading ──detail──▶ DetailReady ──history──▶ DetailAndChartReady
//!    ▲                  │                    │                          │
//!    └──────close───────┴────────────────────┴──────────────────────────┘
//! ```
//!
//! A failed step leaves the surface where it is. A chart can only be attached
//! to a phase that already holds detail, so a chart without detail is not
//! representable.

use super::AssetDetail;
use crate::domain::price_history::ChartSeries;
use crate::shared::AssetId;

/// What has been resolved for the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SurfacePhase {
    #[default]
    Pending,
    Detail(AssetDetail),
    Charted(AssetDetail, ChartSeries),
}

/// Observable state of the surface, derived from visibility and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Closed,
    Loading,
    DetailReady,
    DetailAndChartReady,
}

/// Detail/chart overlay for the selected asset.
///
/// Closing only hides the surface; detail and chart stay until the next
/// selection resets them.
#[derive(Debug, Clone, Default)]
pub struct PresentationSurface {
    visible: bool,
    selected: Option<AssetId>,
    phase: SurfacePhase,
    generation: u64,
}

impl PresentationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&AssetId> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> &SurfacePhase {
        &self.phase
    }

    pub fn state(&self) -> SurfaceState {
        if !self.visible {
            return SurfaceState::Closed;
        }
        match self.phase {
            SurfacePhase::Pending => SurfaceState::Loading,
            SurfacePhase::Detail(_) => SurfaceState::DetailReady,
            SurfacePhase::Charted(..) => SurfaceState::DetailAndChartReady,
        }
    }

    pub fn detail(&self) -> Option<&AssetDetail> {
        match &self.phase {
            SurfacePhase::Pending => None,
            SurfacePhase::Detail(detail) | SurfacePhase::Charted(detail, _) => Some(detail),
        }
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        match &self.phase {
            SurfacePhase::Charted(_, chart) => Some(chart),
            _ => None,
        }
    }

    /// Open in the loading state for a new selection. Returns the selection's
    /// generation; results of earlier selections no longer apply.
    pub(crate) fn open(&mut self, id: AssetId) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.selected = Some(id);
        self.phase = SurfacePhase::Pending;
        self.generation
    }

    pub(crate) fn close(&mut self) {
        self.visible = false;
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Store resolved detail. Only valid while the selection is pending.
    pub(crate) fn resolve_detail(&mut self, generation: u64, detail: AssetDetail) -> bool {
        if !self.is_current(generation) || !matches!(self.phase, SurfacePhase::Pending) {
            return false;
        }
        self.phase = SurfacePhase::Detail(detail);
        true
    }

    /// Attach the chart. Only valid once detail is present.
    pub(crate) fn resolve_chart(&mut self, generation: u64, chart: ChartSeries) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match std::mem::take(&mut self.phase) {
            SurfacePhase::Detail(detail) => {
                self.phase = SurfacePhase::Charted(detail, chart);
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }
}
