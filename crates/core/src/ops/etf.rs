//! Operations on ETF savings-plan pensions.

use std::sync::Arc;

use super::refresh;
use crate::errors::CoreError;
use crate::models::draft::EtfPensionDraft;
use crate::models::pension::{EtfPension, PensionHandle, PensionKind};
use crate::notify::{notify_err, Notifier};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Create/update operations for ETF pensions, plus the endpoint that
/// realizes planned historical contributions.
///
/// One instance is constructed by the facade and shared for the life of
/// the session. Failures are reported to the notifier with a fixed
/// message per operation and then returned unchanged. Single attempt,
/// no retry.
#[derive(Clone)]
pub struct EtfPensionOps {
    client: ApiClient,
    store: Arc<PensionStore>,
    notifier: Arc<dyn Notifier>,
}

impl EtfPensionOps {
    pub fn new(client: ApiClient, store: Arc<PensionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            store,
            notifier,
        }
    }

    /// Create an ETF pension and refresh the cached list. Returns the
    /// server-assigned entity so composite flows can use its id.
    pub async fn create(&self, draft: &EtfPensionDraft) -> Result<EtfPension, CoreError> {
        let result = self.try_create(draft).await;
        notify_err(self.notifier.as_ref(), "Failed to create ETF pension", result)
    }

    async fn try_create(&self, draft: &EtfPensionDraft) -> Result<EtfPension, CoreError> {
        let pension: EtfPension = self
            .client
            .post("/pensions/etf", &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        Ok(pension)
    }

    /// Update an ETF pension. Refreshes the list, and the single-entity
    /// cache as well when the pension is currently selected.
    pub async fn update(&self, id: i64, draft: &EtfPensionDraft) -> Result<(), CoreError> {
        let result = self.try_update(id, draft).await;
        notify_err(self.notifier.as_ref(), "Failed to update ETF pension", result)
    }

    async fn try_update(&self, id: i64, draft: &EtfPensionDraft) -> Result<(), CoreError> {
        let handle = PensionHandle::new(id, PensionKind::Etf);
        self.client
            .put_unit(&refresh::entity_path(&handle), &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }

    /// Convert the pension's planned past contributions into realized
    /// ones on the server, then refresh the entity.
    pub async fn realize_historical_contributions(&self, id: i64) -> Result<(), CoreError> {
        let result = self.try_realize_historical(id).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to realize historical contributions",
            result,
        )
    }

    async fn try_realize_historical(&self, id: i64) -> Result<(), CoreError> {
        let path = format!("/pensions/etf/{id}/realize-historical");
        self.client.post_unit(&path, &serde_json::json!({})).await?;
        let handle = PensionHandle::new(id, PensionKind::Etf);
        refresh::refresh_one(&self.client, &self.store, &handle).await
    }
}
