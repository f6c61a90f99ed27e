//! Price history domain: trailing history window, chart-ready series.

mod convert;
pub mod wire;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Length of the trailing history window, in seconds (30 days).
pub const HISTORY_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

/// Dataset label handed to the chart.
pub const PRICE_DATASET_LABEL: &str = "Price";

/// Fill color of the price line.
pub const PRICE_BACKGROUND_COLOR: &str = "rgb(75, 192, 192)";

/// Stroke color of the price line.
pub const PRICE_BORDER_COLOR: &str = "rgba(75, 192, 192, 0.2)";

// ─── HistoryWindow ───────────────────────────────────────────────────────────

/// Closed `[from, to]` range in Unix seconds, as the range endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub from: i64,
    pub to: i64,
}

impl HistoryWindow {
    /// The 30 days ending at `end`.
    pub fn trailing(end: DateTime<Utc>) -> Self {
        let to = end.timestamp();
        Self {
            from: to - HISTORY_WINDOW_SECS,
            to,
        }
    }

    /// The 30 days ending now.
    pub fn ending_now() -> Self {
        Self::trailing(Utc::now())
    }
}

// ─── PricePoint ──────────────────────────────────────────────────────────────

/// A single sample on the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub time: DateTime<Utc>,
    pub price: f64,
}

// ─── ChartSeries ─────────────────────────────────────────────────────────────

/// The single line dataset of a [`ChartSeries`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub background_color: String,
    pub border_color: String,
}

impl ChartDataset {
    fn price_line(data: Vec<f64>) -> Self {
        Self {
            label: PRICE_DATASET_LABEL.to_string(),
            data,
            fill: false,
            background_color: PRICE_BACKGROUND_COLOR.to_string(),
            border_color: PRICE_BORDER_COLOR.to_string(),
        }
    }
}

/// Chart-ready price history for one asset.
///
/// Serializes as `{ "labels": [...], "datasets": [{ ... }] }`, the shape a
/// line-chart renderer consumes directly. There is always exactly one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    #[serde(skip)]
    points: Vec<PricePoint>,
    labels: Vec<String>,
    #[serde(rename = "datasets", serialize_with = "as_single_element")]
    dataset: ChartDataset,
}

impl ChartSeries {
    /// Build a series labelled with local-timezone dates.
    pub fn from_points(points: Vec<PricePoint>) -> Self {
        Self::from_points_in(points, &Local)
    }

    /// Build a series labelled with dates in `tz`.
    pub fn from_points_in<Tz>(points: Vec<PricePoint>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let labels = points
            .iter()
            .map(|p| locale_date(&p.time.with_timezone(tz)))
            .collect();
        let data = points.iter().map(|p| p.price).collect();

        Self {
            points,
            labels,
            dataset: ChartDataset::price_line(data),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.dataset.data
    }

    pub fn dataset(&self) -> &ChartDataset {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// `M/D/YYYY`, the en-US short date form.
fn locale_date<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format("%-m/%-d/%Y").to_string()
}

fn as_single_element<S>(dataset: &ChartDataset, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    std::slice::from_ref(dataset).serialize(serializer)
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidTimestamp(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidTimestamp(ms) => write!(f, "Invalid timestamp: {}", ms),
        }
    }
}

impl std::error::Error for ValidationError {}
