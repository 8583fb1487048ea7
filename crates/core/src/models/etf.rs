use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog metadata for an ETF referenced by an ETF pension.
/// Fetched separately and attached to list results as enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub last_price_date: Option<NaiveDate>,
}
