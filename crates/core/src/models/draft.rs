//! Form-shaped pension inputs.
//!
//! Drafts mirror what a form produces, not what the API stores: dates
//! and amounts may still be text, and ids may be missing. `to_payload`
//! is the single place a draft becomes a wire body, with every date as
//! a `YYYY-MM-DD` string and every amount as a plain number.
//!
//! Drafts never carry statements. Composite operations take statements
//! as a separate argument, so an update can never accidentally resend
//! statement bodies through the pension endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::contribution::{ContributionFrequency, ContributionStepDraft};
use crate::normalize::{date_payload, id_payload, number_payload, DateInput, NumberInput};

/// Draft of an ETF savings plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EtfPensionDraft {
    pub name: String,
    #[serde(default)]
    pub member_id: NumberInput,
    pub etf_id: String,
    #[serde(default)]
    pub existing_units: NumberInput,
    #[serde(default)]
    pub total_units: NumberInput,
    #[serde(default)]
    pub reference_date: DateInput,
    #[serde(default)]
    pub realize_historical_contributions: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contribution_plan_steps: Vec<ContributionStepDraft>,
}

impl EtfPensionDraft {
    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "member_id": id_payload(&self.member_id),
            "etf_id": self.etf_id,
            "existing_units": number_payload(&self.existing_units),
            "total_units": number_payload(&self.total_units),
            "reference_date": date_payload(&self.reference_date),
            "realize_historical_contributions": self.realize_historical_contributions,
            "notes": self.notes,
            "contribution_plan_steps": steps_payload(&self.contribution_plan_steps),
        })
    }
}

/// Draft of a private insurance pension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsurancePensionDraft {
    pub name: String,
    #[serde(default)]
    pub member_id: NumberInput,
    pub provider: String,
    #[serde(default)]
    pub contract_number: Option<String>,
    #[serde(default)]
    pub start_date: DateInput,
    #[serde(default)]
    pub guaranteed_interest: NumberInput,
    #[serde(default)]
    pub expected_return: NumberInput,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contribution_plan_steps: Vec<ContributionStepDraft>,
}

impl InsurancePensionDraft {
    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "member_id": id_payload(&self.member_id),
            "provider": self.provider,
            "contract_number": self.contract_number,
            "start_date": date_payload(&self.start_date),
            "guaranteed_interest": number_payload(&self.guaranteed_interest),
            "expected_return": number_payload(&self.expected_return),
            "notes": self.notes,
            "contribution_plan_steps": steps_payload(&self.contribution_plan_steps),
        })
    }
}

/// Draft of an employer-sponsored company pension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyPensionDraft {
    pub name: String,
    #[serde(default)]
    pub member_id: NumberInput,
    pub employer: String,
    #[serde(default)]
    pub start_date: DateInput,
    #[serde(default)]
    pub vesting_period: NumberInput,
    #[serde(default)]
    pub matching_percentage: NumberInput,
    #[serde(default)]
    pub max_employer_contribution: NumberInput,
    #[serde(default)]
    pub contribution_amount: NumberInput,
    #[serde(default)]
    pub contribution_frequency: Option<ContributionFrequency>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contribution_plan_steps: Vec<ContributionStepDraft>,
}

impl CompanyPensionDraft {
    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "member_id": id_payload(&self.member_id),
            "employer": self.employer,
            "start_date": date_payload(&self.start_date),
            "vesting_period": number_payload(&self.vesting_period),
            "matching_percentage": number_payload(&self.matching_percentage),
            "max_employer_contribution": number_payload(&self.max_employer_contribution),
            "contribution_amount": number_payload(&self.contribution_amount),
            "contribution_frequency": self.contribution_frequency,
            "notes": self.notes,
            "contribution_plan_steps": steps_payload(&self.contribution_plan_steps),
        })
    }
}

/// Draft of a statutory state pension claim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatePensionDraft {
    pub name: String,
    #[serde(default)]
    pub member_id: NumberInput,
    #[serde(default)]
    pub start_date: DateInput,
    #[serde(default)]
    pub current_monthly_amount: NumberInput,
    #[serde(default)]
    pub projected_monthly_amount: NumberInput,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StatePensionDraft {
    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "member_id": id_payload(&self.member_id),
            "start_date": date_payload(&self.start_date),
            "current_monthly_amount": number_payload(&self.current_monthly_amount),
            "projected_monthly_amount": number_payload(&self.projected_monthly_amount),
            "notes": self.notes,
        })
    }
}

/// Body for the one-time-investment endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OneTimeInvestment {
    #[serde(default)]
    pub amount: NumberInput,
    #[serde(default)]
    pub investment_date: DateInput,
    #[serde(default)]
    pub note: Option<String>,
}

impl OneTimeInvestment {
    pub fn to_payload(&self) -> Value {
        json!({
            "amount": number_payload(&self.amount),
            "investment_date": date_payload(&self.investment_date),
            "note": self.note,
        })
    }
}

/// One manually recorded past contribution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContributionHistoryEntry {
    #[serde(default)]
    pub amount: NumberInput,
    #[serde(default)]
    pub contribution_date: DateInput,
    #[serde(default)]
    pub is_manual: bool,
    #[serde(default)]
    pub note: Option<String>,
}

impl ContributionHistoryEntry {
    pub fn to_payload(&self) -> Value {
        json!({
            "amount": number_payload(&self.amount),
            "contribution_date": date_payload(&self.contribution_date),
            "is_manual": self.is_manual,
            "note": self.note,
        })
    }
}

fn steps_payload(steps: &[ContributionStepDraft]) -> Value {
    Value::Array(steps.iter().map(|s| s.to_payload()).collect())
}
