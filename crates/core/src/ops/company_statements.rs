//! Nested CRUD for company-pension statements.
//!
//! Retirement projections are embedded in statement payloads, never
//! addressed on their own.

use std::sync::Arc;

use super::refresh;
use crate::errors::CoreError;
use crate::models::pension::{PensionHandle, PensionKind};
use crate::models::statement::{CompanyStatement, CompanyStatementDraft};
use crate::notify::{notify_err, Notifier};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Statement operations under `/pensions/company/{id}/statements`.
#[derive(Clone)]
pub struct CompanyStatementOps {
    client: ApiClient,
    store: Arc<PensionStore>,
    notifier: Arc<dyn Notifier>,
}

impl CompanyStatementOps {
    pub fn new(client: ApiClient, store: Arc<PensionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            store,
            notifier,
        }
    }

    fn collection_path(pension_id: i64) -> String {
        format!("/pensions/company/{pension_id}/statements")
    }

    fn entity_path(pension_id: i64, statement_id: i64) -> String {
        format!("/pensions/company/{pension_id}/statements/{statement_id}")
    }

    /// Create a statement under a pension. Returns the persisted record
    /// with its server-assigned id.
    pub async fn create(
        &self,
        pension_id: i64,
        draft: &CompanyStatementDraft,
    ) -> Result<CompanyStatement, CoreError> {
        let result = self
            .client
            .post(&Self::collection_path(pension_id), &draft.to_payload())
            .await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to create company statement",
            result,
        )
    }

    /// All statements of a pension, as the server orders them.
    pub async fn list(&self, pension_id: i64) -> Result<Vec<CompanyStatement>, CoreError> {
        let result = self.client.get(&Self::collection_path(pension_id)).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to load company statements",
            result,
        )
    }

    /// The most recent statement, or `None` when the pension has none.
    pub async fn latest(&self, pension_id: i64) -> Result<Option<CompanyStatement>, CoreError> {
        let path = format!("{}/latest", Self::collection_path(pension_id));
        match self.client.get::<CompanyStatement>(&path).await {
            Ok(statement) => Ok(Some(statement)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => {
                self.notifier.error("Failed to load company statements");
                Err(e)
            }
        }
    }

    /// One statement by id.
    pub async fn get(
        &self,
        pension_id: i64,
        statement_id: i64,
    ) -> Result<CompanyStatement, CoreError> {
        let result = self
            .client
            .get(&Self::entity_path(pension_id, statement_id))
            .await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to load company statement",
            result,
        )
    }

    /// Update a statement by id.
    pub async fn update(
        &self,
        pension_id: i64,
        statement_id: i64,
        draft: &CompanyStatementDraft,
    ) -> Result<(), CoreError> {
        let result = self
            .client
            .put_unit(&Self::entity_path(pension_id, statement_id), &draft.to_payload())
            .await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to update company statement",
            result,
        )
    }

    /// Delete a statement. Irreversible from the client's perspective;
    /// refreshes the parent pension when it is currently selected so
    /// derived views (projection charts) reflect the removal.
    pub async fn delete(&self, pension_id: i64, statement_id: i64) -> Result<(), CoreError> {
        let result = self.try_delete(pension_id, statement_id).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to delete company statement",
            result,
        )
    }

    async fn try_delete(&self, pension_id: i64, statement_id: i64) -> Result<(), CoreError> {
        self.client
            .delete(&Self::entity_path(pension_id, statement_id))
            .await?;
        let handle = PensionHandle::new(pension_id, PensionKind::Company);
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }
}
