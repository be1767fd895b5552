//! Payload shapes carried by each slide kind.
//!
//! Every struct decodes with `#[serde(default)]` so a partially filled metric
//! group still renders, with missing numbers shown as a placeholder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    #[default]
    Count,
    Currency,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    Ecommerce,
    Social,
    Advertising,
}

impl Domain {
    pub fn label(self) -> &'static str {
        match self {
            Domain::Ecommerce => "Store",
            Domain::Social => "Social",
            Domain::Advertising => "Advertising",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroPayload {
    pub user: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionPayload {
    pub domain: Option<Domain>,
    pub blurb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardPayload {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Highlight {
    pub label: String,
    pub value: Option<f64>,
    pub unit: Unit,
    pub currency: Option<String>,
    /// Pre-rendered text for highlights that are not numbers (a month name).
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecapPayload {
    pub highlights: Vec<Highlight>,
}

/// A single headline number with an optional previous-year reading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatPayload {
    pub value: Option<f64>,
    pub previous: Option<f64>,
    pub unit: Unit,
    pub currency: Option<String>,
    pub caption: Option<String>,
}

/// A ratio in `0.0..=1.0`, optionally against a benchmark ratio.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatePayload {
    pub rate: Option<f64>,
    pub benchmark: Option<f64>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankedItem {
    pub label: String,
    pub value: Option<f64>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingPayload {
    pub items: Vec<RankedItem>,
    pub unit: Unit,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// One positioned heatmap cell. Geometry is expressed in fractions of the
/// unit square so the renderer can scale it to any box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapTile {
    pub label: String,
    pub share: f64,
    pub trend: Trend,
    pub change: Option<f64>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapPayload {
    pub tiles: Vec<HeatmapTile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonthlyActivity {
    pub month: u8,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusiestMonthPayload {
    pub month: u8,
    pub views: u64,
    pub series: Vec<MonthlyActivity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelMetric {
    #[default]
    Spend,
    Leads,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelRecord {
    pub name: String,
    pub spend: Option<f64>,
    pub leads: Option<f64>,
}

impl ChannelRecord {
    pub fn metric(&self, metric: ChannelMetric) -> Option<f64> {
        match metric {
            ChannelMetric::Spend => self.spend,
            ChannelMetric::Leads => self.leads,
        }
    }
}

/// Channel comparison shared by the spend and leads slides; `metric` picks
/// which column is charted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelPayload {
    pub metric: ChannelMetric,
    pub currency: Option<String>,
    pub channels: Vec<ChannelRecord>,
}
