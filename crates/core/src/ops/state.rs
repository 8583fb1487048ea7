//! Operations on statutory state pensions.

use std::sync::Arc;

use super::refresh;
use crate::errors::CoreError;
use crate::models::draft::StatePensionDraft;
use crate::models::pension::{PensionHandle, PensionKind, StatePension};
use crate::notify::{notify_err, Notifier};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Create/update operations for state pensions. State pensions have no
/// contribution plan and no statements, so this is the smallest of the
/// four kind-specific operation sets.
#[derive(Clone)]
pub struct StatePensionOps {
    client: ApiClient,
    store: Arc<PensionStore>,
    notifier: Arc<dyn Notifier>,
}

impl StatePensionOps {
    pub fn new(client: ApiClient, store: Arc<PensionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            store,
            notifier,
        }
    }

    /// Create a state pension and refresh the cached list.
    pub async fn create(&self, draft: &StatePensionDraft) -> Result<StatePension, CoreError> {
        let result = self.try_create(draft).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to create state pension",
            result,
        )
    }

    async fn try_create(&self, draft: &StatePensionDraft) -> Result<StatePension, CoreError> {
        let pension: StatePension = self
            .client
            .post("/pensions/state", &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        Ok(pension)
    }

    /// Update a state pension.
    pub async fn update(&self, id: i64, draft: &StatePensionDraft) -> Result<(), CoreError> {
        let result = self.try_update(id, draft).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to update state pension",
            result,
        )
    }

    async fn try_update(&self, id: i64, draft: &StatePensionDraft) -> Result<(), CoreError> {
        let handle = PensionHandle::new(id, PensionKind::State);
        self.client
            .put_unit(&refresh::entity_path(&handle), &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }
}
