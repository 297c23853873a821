// src/insights/mod.rs
// Business insights summary shown on the dashboard

mod client;
mod fallback;
mod metrics;
mod resolver;

pub use client::{InsightsClient, DEFAULT_BACKEND_URL, INSIGHTS_PATH};
pub use fallback::{fallback_summary, FALLBACK_WARNING};
pub use metrics::DerivedMetrics;
pub use resolver::{InsightsResolver, Resolution};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity_sold: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub id: String,
    pub name: String,
    /// `None` when the backend does not know the on-hand quantity.
    #[serde(rename = "stock_qty", default)]
    pub stock_quantity: Option<u64>,
    pub low_stock_threshold: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub sales: f64,
    pub purchase: f64,
    /// May be negative.
    pub profit: f64,
}

impl Totals {
    pub fn expenses(&self) -> f64 {
        self.sales - self.profit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSummary {
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(rename = "low_stock", default)]
    pub low_stock_items: Vec<LowStockItem>,
    pub totals: Totals,
}

impl InsightsSummary {
    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::from_totals(&self.totals)
    }
}
