use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::contribution::{ContributionFrequency, ContributionStep};
use super::etf::EtfInfo;
use super::statement::{CompanyStatement, InsuranceStatement};

/// The four supported pension kinds. The kind selects the endpoint
/// family and the valid field set; it never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PensionKind {
    #[serde(rename = "ETF_PLAN")]
    Etf,
    Insurance,
    Company,
    State,
}

impl PensionKind {
    /// Fixed order used by fan-out fetches and kind-blind probing.
    pub const ALL: [PensionKind; 4] = [
        PensionKind::Etf,
        PensionKind::Insurance,
        PensionKind::Company,
        PensionKind::State,
    ];

    /// URL path segment of this kind's endpoint family.
    pub fn path_segment(&self) -> &'static str {
        match self {
            PensionKind::Etf => "etf",
            PensionKind::Insurance => "insurance",
            PensionKind::Company => "company",
            PensionKind::State => "state",
        }
    }
}

impl fmt::Display for PensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            PensionKind::Etf => "ETF_PLAN",
            PensionKind::Insurance => "INSURANCE",
            PensionKind::Company => "COMPANY",
            PensionKind::State => "STATE",
        };
        write!(f, "{tag}")
    }
}

/// Whether contributions are currently flowing into the pension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PensionStatus {
    #[default]
    Active,
    Paused,
}

/// Identity of a loaded pension: server id plus kind.
///
/// Operations that must pick an endpoint take a handle captured when the
/// entity was loaded, instead of trusting the local cache to still know
/// the kind at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PensionHandle {
    pub id: i64,
    pub kind: PensionKind,
}

impl PensionHandle {
    pub fn new(id: i64, kind: PensionKind) -> Self {
        Self { id, kind }
    }
}

/// An ETF savings plan: unit-based holdings against a referenced ETF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfPension {
    pub id: i64,
    pub name: String,
    pub member_id: i64,
    #[serde(default)]
    pub status: PensionStatus,
    #[serde(default)]
    pub paused_at: Option<NaiveDate>,
    #[serde(default)]
    pub resume_at: Option<NaiveDate>,
    /// Server-computed; never sent back in payloads.
    #[serde(default)]
    pub current_value: Option<f64>,
    pub etf_id: String,
    #[serde(default)]
    pub existing_units: Option<f64>,
    #[serde(default)]
    pub total_units: Option<f64>,
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default)]
    pub realize_historical_contributions: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contribution_plan_steps: Vec<ContributionStep>,
    /// Catalog metadata, filled in by list enrichment when available.
    #[serde(default)]
    pub etf: Option<EtfInfo>,
}

/// A private insurance pension contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePension {
    pub id: i64,
    pub name: String,
    pub member_id: i64,
    #[serde(default)]
    pub status: PensionStatus,
    #[serde(default)]
    pub paused_at: Option<NaiveDate>,
    #[serde(default)]
    pub resume_at: Option<NaiveDate>,
    #[serde(default)]
    pub current_value: Option<f64>,
    pub provider: String,
    #[serde(default)]
    pub contract_number: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub guaranteed_interest: Option<f64>,
    #[serde(default)]
    pub expected_return: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contribution_plan_steps: Vec<ContributionStep>,
    #[serde(default)]
    pub statements: Vec<InsuranceStatement>,
}

/// An employer-sponsored company pension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPension {
    pub id: i64,
    pub name: String,
    pub member_id: i64,
    #[serde(default)]
    pub status: PensionStatus,
    #[serde(default)]
    pub paused_at: Option<NaiveDate>,
    #[serde(default)]
    pub resume_at: Option<NaiveDate>,
    #[serde(default)]
    pub current_value: Option<f64>,
    pub employer: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub vesting_period: Option<i32>,
    #[serde(default)]
    pub matching_percentage: Option<f64>,
    #[serde(default)]
    pub max_employer_contribution: Option<f64>,
    #[serde(default)]
    pub contribution_amount: Option<f64>,
    #[serde(default)]
    pub contribution_frequency: Option<ContributionFrequency>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contribution_plan_steps: Vec<ContributionStep>,
    #[serde(default)]
    pub statements: Vec<CompanyStatement>,
}

/// A statutory state pension claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePension {
    pub id: i64,
    pub name: String,
    pub member_id: i64,
    #[serde(default)]
    pub status: PensionStatus,
    #[serde(default)]
    pub paused_at: Option<NaiveDate>,
    #[serde(default)]
    pub resume_at: Option<NaiveDate>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub current_monthly_amount: Option<f64>,
    #[serde(default)]
    pub projected_monthly_amount: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A tracked pension of one of the four kinds, tagged the way the API
/// tags it. Every dispatch point matches exhaustively, so adding a kind
/// surfaces every site that needs handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pension {
    #[serde(rename = "ETF_PLAN")]
    Etf(EtfPension),
    #[serde(rename = "INSURANCE")]
    Insurance(InsurancePension),
    #[serde(rename = "COMPANY")]
    Company(CompanyPension),
    #[serde(rename = "STATE")]
    State(StatePension),
}

impl Pension {
    pub fn id(&self) -> i64 {
        match self {
            Pension::Etf(p) => p.id,
            Pension::Insurance(p) => p.id,
            Pension::Company(p) => p.id,
            Pension::State(p) => p.id,
        }
    }

    pub fn kind(&self) -> PensionKind {
        match self {
            Pension::Etf(_) => PensionKind::Etf,
            Pension::Insurance(_) => PensionKind::Insurance,
            Pension::Company(_) => PensionKind::Company,
            Pension::State(_) => PensionKind::State,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Pension::Etf(p) => &p.name,
            Pension::Insurance(p) => &p.name,
            Pension::Company(p) => &p.name,
            Pension::State(p) => &p.name,
        }
    }

    pub fn member_id(&self) -> i64 {
        match self {
            Pension::Etf(p) => p.member_id,
            Pension::Insurance(p) => p.member_id,
            Pension::Company(p) => p.member_id,
            Pension::State(p) => p.member_id,
        }
    }

    pub fn status(&self) -> PensionStatus {
        match self {
            Pension::Etf(p) => p.status,
            Pension::Insurance(p) => p.status,
            Pension::Company(p) => p.status,
            Pension::State(p) => p.status,
        }
    }

    pub fn current_value(&self) -> Option<f64> {
        match self {
            Pension::Etf(p) => p.current_value,
            Pension::Insurance(p) => p.current_value,
            Pension::Company(p) => p.current_value,
            Pension::State(p) => p.current_value,
        }
    }

    /// Identity handle for endpoint-selecting operations.
    pub fn handle(&self) -> PensionHandle {
        PensionHandle::new(self.id(), self.kind())
    }
}

impl From<EtfPension> for Pension {
    fn from(p: EtfPension) -> Self {
        Pension::Etf(p)
    }
}

impl From<InsurancePension> for Pension {
    fn from(p: InsurancePension) -> Self {
        Pension::Insurance(p)
    }
}

impl From<CompanyPension> for Pension {
    fn from(p: CompanyPension) -> Self {
        Pension::Company(p)
    }
}

impl From<StatePension> for Pension {
    fn from(p: StatePension) -> Self {
        Pension::State(p)
    }
}

/// Body for the status-only endpoint, decoupled from the general update
/// so pausing never resends the whole entity. Dates ride along only when
/// set, so a resume does not clobber the server's pause history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionStatusUpdate {
    pub status: PensionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_at: Option<NaiveDate>,
}

impl PensionStatusUpdate {
    /// Pause as of `paused_at`, optionally scheduling a resume date.
    pub fn pause(paused_at: NaiveDate, resume_at: Option<NaiveDate>) -> Self {
        Self {
            status: PensionStatus::Paused,
            paused_at: Some(paused_at),
            resume_at,
        }
    }

    /// Resume contributions immediately.
    pub fn resume() -> Self {
        Self {
            status: PensionStatus::Active,
            paused_at: None,
            resume_at: None,
        }
    }

    /// Wire body for the status endpoint. Unset dates are omitted, not
    /// sent as null.
    pub fn to_payload(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            "status".into(),
            serde_json::json!(self.status),
        );
        if let Some(d) = self.paused_at {
            body.insert(
                "paused_at".into(),
                serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            );
        }
        if let Some(d) = self.resume_at {
            body.insert(
                "resume_at".into(),
                serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            );
        }
        serde_json::Value::Object(body)
    }
}
