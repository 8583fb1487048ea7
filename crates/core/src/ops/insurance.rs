//! Operations on insurance pensions, including their nested statements
//! and the composite create/update-with-statements flows.

use std::sync::Arc;

use super::refresh;
use crate::errors::CoreError;
use crate::models::draft::InsurancePensionDraft;
use crate::models::pension::{InsurancePension, PensionHandle, PensionKind};
use crate::models::statement::{
    InsuranceStatement, InsuranceStatementDraft, InsuranceStatementUpdate,
};
use crate::notify::{notify_err, Notifier};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Create/update operations for insurance pensions plus statement CRUD
/// under `/pensions/insurance/{id}/statements`.
#[derive(Clone)]
pub struct InsurancePensionOps {
    client: ApiClient,
    store: Arc<PensionStore>,
    notifier: Arc<dyn Notifier>,
}

impl InsurancePensionOps {
    pub fn new(client: ApiClient, store: Arc<PensionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            store,
            notifier,
        }
    }

    // ── Pension body ────────────────────────────────────────────────

    /// Create an insurance pension and refresh the cached list.
    pub async fn create(&self, draft: &InsurancePensionDraft) -> Result<InsurancePension, CoreError> {
        let result = self.try_create(draft).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to create insurance pension",
            result,
        )
    }

    async fn try_create(&self, draft: &InsurancePensionDraft) -> Result<InsurancePension, CoreError> {
        let pension: InsurancePension = self
            .client
            .post("/pensions/insurance", &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        Ok(pension)
    }

    /// Update an insurance pension body. The draft type carries no
    /// statements, so statement bodies can never ride along on the
    /// pension endpoint.
    pub async fn update(&self, id: i64, draft: &InsurancePensionDraft) -> Result<(), CoreError> {
        let result = self.try_update(id, draft).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to update insurance pension",
            result,
        )
    }

    async fn try_update(&self, id: i64, draft: &InsurancePensionDraft) -> Result<(), CoreError> {
        let handle = PensionHandle::new(id, PensionKind::Insurance);
        self.client
            .put_unit(&refresh::entity_path(&handle), &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }

    // ── Composite flows ─────────────────────────────────────────────

    /// Create a pension, then create its statements one by one against
    /// the new id. Not transactional: when a statement creation fails,
    /// the pension and the statements created before it stay persisted,
    /// and the statement error is returned.
    pub async fn create_with_statements(
        &self,
        draft: &InsurancePensionDraft,
        statements: &[InsuranceStatementDraft],
    ) -> Result<InsurancePension, CoreError> {
        let pension = self.create(draft).await?;
        for statement in statements {
            self.create_statement(pension.id, statement).await?;
        }
        Ok(pension)
    }

    /// Update the pension body, then each statement by its existing id,
    /// sequentially, then refresh the single-entity cache when the
    /// pension is selected. Same partial-failure behavior as creation.
    pub async fn update_with_statements(
        &self,
        id: i64,
        draft: &InsurancePensionDraft,
        statements: &[InsuranceStatementUpdate],
    ) -> Result<(), CoreError> {
        self.update(id, draft).await?;
        for statement in statements {
            self.update_statement(id, statement.id, &statement.draft)
                .await?;
        }
        let handle = PensionHandle::new(id, PensionKind::Insurance);
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }

    // ── Statements ──────────────────────────────────────────────────

    /// Create a statement under a pension.
    pub async fn create_statement(
        &self,
        pension_id: i64,
        draft: &InsuranceStatementDraft,
    ) -> Result<InsuranceStatement, CoreError> {
        let path = format!("/pensions/insurance/{pension_id}/statements");
        let result = self.client.post(&path, &draft.to_payload()).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to create insurance statement",
            result,
        )
    }

    /// Update a statement by id.
    pub async fn update_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
        draft: &InsuranceStatementDraft,
    ) -> Result<(), CoreError> {
        let path = format!("/pensions/insurance/{pension_id}/statements/{statement_id}");
        let result = self.client.put_unit(&path, &draft.to_payload()).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to update insurance statement",
            result,
        )
    }

    /// Delete a statement. Irreversible; refreshes the parent pension
    /// when it is currently selected so derived views drop the entry.
    pub async fn delete_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
    ) -> Result<(), CoreError> {
        let result = self.try_delete_statement(pension_id, statement_id).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to delete insurance statement",
            result,
        )
    }

    async fn try_delete_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
    ) -> Result<(), CoreError> {
        let path = format!("/pensions/insurance/{pension_id}/statements/{statement_id}");
        self.client.delete(&path).await?;
        let handle = PensionHandle::new(pension_id, PensionKind::Insurance);
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }
}
