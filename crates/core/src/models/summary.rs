use serde::{Deserialize, Serialize};

use super::pension::{PensionKind, PensionStatus};

/// Lightweight list row from the summary endpoints: enough to render a
/// pension list without fetching full entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionSummary {
    pub id: i64,
    pub kind: PensionKind,
    pub name: String,
    pub member_id: i64,
    #[serde(default)]
    pub status: PensionStatus,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub total_invested: Option<f64>,
}

impl PensionSummary {
    /// Identity handle, same as the one a full entity would yield.
    pub fn handle(&self) -> super::pension::PensionHandle {
        super::pension::PensionHandle::new(self.id, self.kind)
    }
}

/// Wire row as the per-kind summary endpoint returns it. The endpoint
/// already encodes the kind, so rows do not carry a tag of their own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct PensionSummaryRow {
    pub id: i64,
    pub name: String,
    pub member_id: i64,
    #[serde(default)]
    pub status: PensionStatus,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub total_invested: Option<f64>,
}

impl PensionSummaryRow {
    pub(crate) fn tagged(self, kind: PensionKind) -> PensionSummary {
        PensionSummary {
            id: self.id,
            kind,
            name: self.name,
            member_id: self.member_id,
            status: self.status,
            current_value: self.current_value,
            total_invested: self.total_invested,
        }
    }
}
