use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server-computed aggregates for one pension. Read-only on the client;
/// cached per pension id by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionStatistics {
    pub total_invested_amount: f64,
    pub current_value: f64,
    #[serde(default)]
    pub total_return: Option<f64>,
    #[serde(default)]
    pub annual_return: Option<f64>,
    /// Historical value per date, oldest first.
    #[serde(default)]
    pub value_history: Vec<ValuePoint>,
    /// Contributions per date, oldest first.
    #[serde(default)]
    pub contribution_history: Vec<ContributionPoint>,
    /// Forward projections keyed by scenario name ("pessimistic", ...).
    #[serde(default)]
    pub scenarios: HashMap<String, ScenarioProjection>,
}

/// One point of a pension's value history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One realized or planned contribution in a pension's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionPoint {
    pub date: NaiveDate,
    pub amount: f64,
    /// False for planned contributions that have not been realized yet.
    #[serde(default)]
    pub is_realized: bool,
}

/// Projected outcome under one return-rate scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub final_value: f64,
    #[serde(default)]
    pub monthly_payout: Option<f64>,
    #[serde(default)]
    pub total_contributions: Option<f64>,
}
