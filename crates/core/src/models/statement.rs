use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::normalize::{date_payload, number_payload, DateInput, NumberInput};

/// A point-in-time snapshot of a company pension's value, with the
/// retirement projections the employer reported alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStatement {
    /// Assigned by the server; `None` only for entries not yet persisted.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub pension_id: Option<i64>,
    pub statement_date: NaiveDate,
    pub value: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub retirement_projections: Vec<RetirementProjection>,
}

/// Projected payout at a given retirement age, embedded in a statement.
/// Not separately addressable; it travels with its parent statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    #[serde(default)]
    pub id: Option<i64>,
    pub retirement_age: i32,
    pub monthly_payout: f64,
    pub total_capital: f64,
}

/// A point-in-time snapshot of an insurance pension's value with the
/// insurer's cost breakdown and scenario projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceStatement {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub pension_id: Option<i64>,
    pub statement_date: NaiveDate,
    pub value: f64,
    #[serde(default)]
    pub total_contributions: Option<f64>,
    #[serde(default)]
    pub total_benefits: Option<f64>,
    #[serde(default)]
    pub costs_amount: Option<f64>,
    #[serde(default)]
    pub costs_percentage: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub projections: Vec<InsuranceProjection>,
}

/// Which contribution assumption an insurance projection was run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionScenario {
    #[default]
    WithContributions,
    WithoutContributions,
}

/// Insurer-provided forward estimate, embedded in a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProjection {
    #[serde(default)]
    pub id: Option<i64>,
    pub scenario_type: ProjectionScenario,
    pub return_rate: f64,
    pub value_at_retirement: f64,
    #[serde(default)]
    pub monthly_payout: Option<f64>,
}

/// Form-shaped company statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyStatementDraft {
    #[serde(default)]
    pub statement_date: DateInput,
    #[serde(default)]
    pub value: NumberInput,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub retirement_projections: Vec<RetirementProjectionDraft>,
}

impl CompanyStatementDraft {
    /// Wire shape: dates as `YYYY-MM-DD` strings, amounts as numbers.
    pub fn to_payload(&self) -> Value {
        json!({
            "statement_date": date_payload(&self.statement_date),
            "value": number_payload(&self.value),
            "note": self.note,
            "retirement_projections": self
                .retirement_projections
                .iter()
                .map(|p| p.to_payload())
                .collect::<Vec<_>>(),
        })
    }
}

/// Form-shaped retirement projection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetirementProjectionDraft {
    #[serde(default)]
    pub retirement_age: NumberInput,
    #[serde(default)]
    pub monthly_payout: NumberInput,
    #[serde(default)]
    pub total_capital: NumberInput,
}

impl RetirementProjectionDraft {
    pub fn to_payload(&self) -> Value {
        json!({
            "retirement_age": number_payload(&self.retirement_age),
            "monthly_payout": number_payload(&self.monthly_payout),
            "total_capital": number_payload(&self.total_capital),
        })
    }
}

/// A company statement edit addressed at an already-persisted record.
/// Composite updates require the id up front, so a not-yet-saved entry
/// can never slip through the update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStatementUpdate {
    pub id: i64,
    pub draft: CompanyStatementDraft,
}

impl CompanyStatementUpdate {
    pub fn new(id: i64, draft: CompanyStatementDraft) -> Self {
        Self { id, draft }
    }
}

/// An insurance statement edit addressed at an already-persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceStatementUpdate {
    pub id: i64,
    pub draft: InsuranceStatementDraft,
}

impl InsuranceStatementUpdate {
    pub fn new(id: i64, draft: InsuranceStatementDraft) -> Self {
        Self { id, draft }
    }
}

/// Form-shaped insurance statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsuranceStatementDraft {
    #[serde(default)]
    pub statement_date: DateInput,
    #[serde(default)]
    pub value: NumberInput,
    #[serde(default)]
    pub total_contributions: NumberInput,
    #[serde(default)]
    pub total_benefits: NumberInput,
    #[serde(default)]
    pub costs_amount: NumberInput,
    #[serde(default)]
    pub costs_percentage: NumberInput,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub projections: Vec<InsuranceProjectionDraft>,
}

impl InsuranceStatementDraft {
    /// Wire shape: dates as `YYYY-MM-DD` strings, amounts as numbers.
    pub fn to_payload(&self) -> Value {
        json!({
            "statement_date": date_payload(&self.statement_date),
            "value": number_payload(&self.value),
            "total_contributions": number_payload(&self.total_contributions),
            "total_benefits": number_payload(&self.total_benefits),
            "costs_amount": number_payload(&self.costs_amount),
            "costs_percentage": number_payload(&self.costs_percentage),
            "note": self.note,
            "projections": self
                .projections
                .iter()
                .map(|p| p.to_payload())
                .collect::<Vec<_>>(),
        })
    }
}

/// Form-shaped insurance projection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsuranceProjectionDraft {
    #[serde(default)]
    pub scenario_type: ProjectionScenario,
    #[serde(default)]
    pub return_rate: NumberInput,
    #[serde(default)]
    pub value_at_retirement: NumberInput,
    #[serde(default)]
    pub monthly_payout: NumberInput,
}

impl InsuranceProjectionDraft {
    pub fn to_payload(&self) -> Value {
        json!({
            "scenario_type": self.scenario_type,
            "return_rate": number_payload(&self.return_rate),
            "value_at_retirement": number_payload(&self.value_at_retirement),
            "monthly_payout": number_payload(&self.monthly_payout),
        })
    }
}
