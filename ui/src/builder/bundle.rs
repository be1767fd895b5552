//! The metrics bundle consumed by the slide builder.
//!
//! Each optional field is one metric group. Groups already carry the payload
//! shape of the slide they feed, so the builder passes them through as-is.

use serde::{Deserialize, Serialize};

use crate::error::WrapError;
use crate::slides::payload::{
    ChannelRecord, MonthlyActivity, RankingPayload, RatePayload, StatPayload,
};

const SAMPLE_BUNDLE: &str = include_str!("../../data/sample_wrap.json");

/// Raw per-category revenue, input to the heatmap layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryRecord {
    pub category: String,
    pub revenue: f64,
    pub previous_revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    pub user: String,
    pub year: i32,
    pub currency: Option<String>,

    // e-commerce
    pub revenue: Option<StatPayload>,
    pub orders: Option<StatPayload>,
    pub refund_rate: Option<RatePayload>,
    pub conversion_rate: Option<RatePayload>,
    pub top_products: Option<RankingPayload>,
    pub category_sales: Option<Vec<CategoryRecord>>,

    // social
    pub followers: Option<StatPayload>,
    pub engagement_rate: Option<RatePayload>,
    pub top_posts: Option<RankingPayload>,
    pub profile_activity: Option<Vec<MonthlyActivity>>,

    // advertising
    pub ad_spend: Option<StatPayload>,
    pub channels: Option<Vec<ChannelRecord>>,
    pub top_campaigns: Option<RankingPayload>,
}

impl MetricsBundle {
    /// A bundle with identification only and no metric groups.
    pub fn new(user: impl Into<String>, year: i32) -> Self {
        Self {
            user: user.into(),
            year,
            currency: None,
            revenue: None,
            orders: None,
            refund_rate: None,
            conversion_rate: None,
            top_products: None,
            category_sales: None,
            followers: None,
            engagement_rate: None,
            top_posts: None,
            profile_activity: None,
            ad_spend: None,
            channels: None,
            top_campaigns: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, WrapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The demo bundle compiled into the crate.
    pub fn sample() -> Result<Self, WrapError> {
        Self::from_json(SAMPLE_BUNDLE)
    }
}
