use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::normalize::{date_payload, number_payload, DateInput, NumberInput};

/// How often a contribution step recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionFrequency {
    #[default]
    Monthly,
    Quarterly,
    SemiAnnually,
    Annually,
    OneTime,
}

/// One scheduled contribution: an amount recurring at `frequency` from
/// `start_date` until an optional `end_date`. Steps are ordered by start
/// date; overlap checking is the server's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionStep {
    #[serde(default)]
    pub id: Option<i64>,
    pub amount: f64,
    pub frequency: ContributionFrequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Form-shaped contribution step: dates and amounts may still be text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContributionStepDraft {
    #[serde(default)]
    pub amount: NumberInput,
    #[serde(default)]
    pub frequency: ContributionFrequency,
    #[serde(default)]
    pub start_date: DateInput,
    #[serde(default)]
    pub end_date: DateInput,
    #[serde(default)]
    pub note: Option<String>,
}

impl ContributionStepDraft {
    /// Wire shape: dates as `YYYY-MM-DD` strings, amounts as numbers.
    pub fn to_payload(&self) -> Value {
        json!({
            "amount": number_payload(&self.amount),
            "frequency": self.frequency,
            "start_date": date_payload(&self.start_date),
            "end_date": date_payload(&self.end_date),
            "note": self.note,
        })
    }
}
