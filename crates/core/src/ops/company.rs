//! Operations on company (employer-sponsored) pensions, including the
//! composite create/update-with-statements flows.

use std::sync::Arc;

use super::company_statements::CompanyStatementOps;
use super::refresh;
use crate::errors::CoreError;
use crate::models::draft::CompanyPensionDraft;
use crate::models::pension::{CompanyPension, PensionHandle, PensionKind};
use crate::models::statement::{CompanyStatementDraft, CompanyStatementUpdate};
use crate::notify::{notify_err, Notifier};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Create/update operations for company pensions. Statement CRUD lives
/// in [`CompanyStatementOps`]; this struct carries its own instance for
/// the composite flows.
#[derive(Clone)]
pub struct CompanyPensionOps {
    client: ApiClient,
    store: Arc<PensionStore>,
    notifier: Arc<dyn Notifier>,
    statements: CompanyStatementOps,
}

impl CompanyPensionOps {
    pub fn new(client: ApiClient, store: Arc<PensionStore>, notifier: Arc<dyn Notifier>) -> Self {
        let statements =
            CompanyStatementOps::new(client.clone(), store.clone(), notifier.clone());
        Self {
            client,
            store,
            notifier,
            statements,
        }
    }

    /// Create a company pension and refresh the cached list.
    pub async fn create(&self, draft: &CompanyPensionDraft) -> Result<CompanyPension, CoreError> {
        let result = self.try_create(draft).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to create company pension",
            result,
        )
    }

    async fn try_create(&self, draft: &CompanyPensionDraft) -> Result<CompanyPension, CoreError> {
        let pension: CompanyPension = self
            .client
            .post("/pensions/company", &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        Ok(pension)
    }

    /// Update a company pension body. Statements are updated through
    /// their own endpoint, never through this one.
    pub async fn update(&self, id: i64, draft: &CompanyPensionDraft) -> Result<(), CoreError> {
        let result = self.try_update(id, draft).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to update company pension",
            result,
        )
    }

    async fn try_update(&self, id: i64, draft: &CompanyPensionDraft) -> Result<(), CoreError> {
        let handle = PensionHandle::new(id, PensionKind::Company);
        self.client
            .put_unit(&refresh::entity_path(&handle), &draft.to_payload())
            .await?;
        refresh::refresh_list(&self.client, &self.store).await?;
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }

    /// Create a pension, then create its statements one by one against
    /// the new id. Not transactional: when a statement creation fails,
    /// the pension and the statements created before it stay persisted,
    /// and the statement error is returned.
    pub async fn create_with_statements(
        &self,
        draft: &CompanyPensionDraft,
        statements: &[CompanyStatementDraft],
    ) -> Result<CompanyPension, CoreError> {
        let pension = self.create(draft).await?;
        for statement in statements {
            self.statements.create(pension.id, statement).await?;
        }
        Ok(pension)
    }

    /// Update the pension body, then each statement by its existing id,
    /// sequentially, then refresh the single-entity cache when the
    /// pension is selected. Same partial-failure behavior as creation.
    pub async fn update_with_statements(
        &self,
        id: i64,
        draft: &CompanyPensionDraft,
        statements: &[CompanyStatementUpdate],
    ) -> Result<(), CoreError> {
        self.update(id, draft).await?;
        for statement in statements {
            self.statements
                .update(id, statement.id, &statement.draft)
                .await?;
        }
        let handle = PensionHandle::new(id, PensionKind::Company);
        refresh::refresh_one_if_selected(&self.client, &self.store, &handle).await
    }
}
