pub mod errors;
pub mod models;
pub mod normalize;
pub mod notify;
pub mod ops;
pub mod store;
pub mod transport;

use std::sync::Arc;

use errors::CoreError;
use models::draft::{
    CompanyPensionDraft, ContributionHistoryEntry, EtfPensionDraft, InsurancePensionDraft,
    OneTimeInvestment, StatePensionDraft,
};
use models::pension::{
    CompanyPension, EtfPension, InsurancePension, Pension, PensionHandle, PensionKind,
    PensionStatusUpdate, StatePension,
};
use models::statement::{
    CompanyStatement, CompanyStatementDraft, CompanyStatementUpdate, InsuranceStatement,
    InsuranceStatementDraft, InsuranceStatementUpdate,
};
use models::statistics::PensionStatistics;
use models::summary::PensionSummary;
use notify::{LogNotifier, Notifier};
use ops::company::CompanyPensionOps;
use ops::company_statements::CompanyStatementOps;
use ops::etf::EtfPensionOps;
use ops::insurance::InsurancePensionOps;
use ops::pensions::PensionOps;
use ops::state::StatePensionOps;
use store::PensionStore;
use transport::client::ApiClient;
use transport::http::HttpTransport;
use transport::traits::ApiTransport;

/// Main entry point for the pension planner core library.
///
/// Composition root: owns the shared pension cache and every operation
/// struct, all wired once at construction against one transport and one
/// notifier. Methods take `&self`, so distinct user actions can be in
/// flight concurrently — exactly as in the UI this layer backs. The
/// cache applies their results last-write-wins; nothing orders two
/// independent actions relative to each other.
#[must_use]
pub struct PensionPlanner {
    store: Arc<PensionStore>,
    pensions: PensionOps,
    etf: EtfPensionOps,
    insurance: InsurancePensionOps,
    company: CompanyPensionOps,
    company_statements: CompanyStatementOps,
    state: StatePensionOps,
}

impl std::fmt::Debug for PensionPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PensionPlanner").finish_non_exhaustive()
    }
}

impl PensionPlanner {
    /// Connect to the backend at `base_url` with the default notifier
    /// (failure notices go to the `log` facade).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(base_url)), Arc::new(LogNotifier))
    }

    /// Wire the planner against an arbitrary transport and notifier.
    /// This is the seam embedders (and tests) use to swap the backend
    /// or route failure notices into a real toast system.
    pub fn with_transport(transport: Arc<dyn ApiTransport>, notifier: Arc<dyn Notifier>) -> Self {
        let client = ApiClient::new(transport);
        let store = Arc::new(PensionStore::new());
        Self {
            pensions: PensionOps::new(client.clone(), store.clone(), notifier.clone()),
            etf: EtfPensionOps::new(client.clone(), store.clone(), notifier.clone()),
            insurance: InsurancePensionOps::new(client.clone(), store.clone(), notifier.clone()),
            company: CompanyPensionOps::new(client.clone(), store.clone(), notifier.clone()),
            company_statements: CompanyStatementOps::new(
                client.clone(),
                store.clone(),
                notifier.clone(),
            ),
            state: StatePensionOps::new(client, store.clone(), notifier),
            store,
        }
    }

    // ── Cache reads ─────────────────────────────────────────────────

    /// Snapshot of the cached pension list.
    pub async fn pensions(&self) -> Vec<Pension> {
        self.store.pensions().await
    }

    /// One cached pension by id, if the cache knows it.
    pub async fn pension(&self, id: i64) -> Option<Pension> {
        self.store.pension(id).await
    }

    /// The currently selected pension, if any.
    pub async fn selected_pension(&self) -> Option<Pension> {
        self.store.selected_pension().await
    }

    /// Drop the current selection.
    pub async fn clear_selection(&self) {
        self.store.deselect().await;
    }

    /// Cached statistics for a pension, if already fetched.
    pub async fn statistics(&self, id: i64) -> Option<PensionStatistics> {
        self.store.statistics(id).await
    }

    /// True while a statistics request for this id is in flight.
    pub async fn is_statistics_loading(&self, id: i64) -> bool {
        self.store.is_statistics_loading(id).await
    }

    /// Clear the whole cache, e.g. on logout or household switch.
    pub async fn clear_cache(&self) {
        self.store.clear().await;
    }

    // ── Shared operations ───────────────────────────────────────────

    /// Fetch all pensions (optionally for one household member) and
    /// replace the cached list.
    pub async fn fetch_pensions(&self, member_id: Option<i64>) -> Result<Vec<Pension>, CoreError> {
        self.pensions.fetch_pensions(member_id).await
    }

    /// Lightweight list rows, without touching the pension cache.
    pub async fn fetch_pension_summaries(
        &self,
        member_id: Option<i64>,
    ) -> Result<Vec<PensionSummary>, CoreError> {
        self.pensions.fetch_pension_summaries(member_id).await
    }

    /// Fetch one pension, probing kind endpoints when the kind is
    /// unknown. The result is cached and becomes the selection.
    pub async fn fetch_pension(
        &self,
        id: i64,
        kind: Option<PensionKind>,
    ) -> Result<Pension, CoreError> {
        self.pensions.fetch_pension(id, kind).await
    }

    /// Delete a pension by identity handle.
    pub async fn delete_pension(&self, handle: &PensionHandle) -> Result<(), CoreError> {
        self.pensions.delete_pension(handle).await
    }

    /// Delete a pension resolving its kind from the local cache; fails
    /// locally when the cache does not know the id.
    pub async fn delete_pension_by_id(&self, id: i64) -> Result<(), CoreError> {
        self.pensions.delete_pension_by_id(id).await
    }

    /// Fetch and cache statistics for one pension.
    pub async fn fetch_statistics(
        &self,
        id: i64,
        kind: Option<PensionKind>,
    ) -> Result<PensionStatistics, CoreError> {
        self.pensions.fetch_statistics(id, kind).await
    }

    /// Pause or resume a pension through the status-only endpoint.
    pub async fn update_pension_status(
        &self,
        handle: &PensionHandle,
        update: &PensionStatusUpdate,
    ) -> Result<(), CoreError> {
        self.pensions.update_status(handle, update).await
    }

    /// Record a one-time investment against a pension.
    pub async fn add_one_time_investment(
        &self,
        handle: &PensionHandle,
        investment: &OneTimeInvestment,
    ) -> Result<(), CoreError> {
        self.pensions.add_one_time_investment(handle, investment).await
    }

    /// Record a past contribution against a pension.
    pub async fn add_contribution_history(
        &self,
        handle: &PensionHandle,
        entry: &ContributionHistoryEntry,
    ) -> Result<(), CoreError> {
        self.pensions.add_contribution_history(handle, entry).await
    }

    // ── ETF pensions ────────────────────────────────────────────────

    /// Create an ETF pension; returns the server-assigned entity.
    pub async fn create_etf_pension(
        &self,
        draft: &EtfPensionDraft,
    ) -> Result<EtfPension, CoreError> {
        self.etf.create(draft).await
    }

    /// Update an ETF pension.
    pub async fn update_etf_pension(
        &self,
        id: i64,
        draft: &EtfPensionDraft,
    ) -> Result<(), CoreError> {
        self.etf.update(id, draft).await
    }

    /// Realize the pension's planned historical contributions.
    pub async fn realize_historical_contributions(&self, id: i64) -> Result<(), CoreError> {
        self.etf.realize_historical_contributions(id).await
    }

    // ── Insurance pensions ──────────────────────────────────────────

    /// Create an insurance pension; returns the server-assigned entity.
    pub async fn create_insurance_pension(
        &self,
        draft: &InsurancePensionDraft,
    ) -> Result<InsurancePension, CoreError> {
        self.insurance.create(draft).await
    }

    /// Update an insurance pension body.
    pub async fn update_insurance_pension(
        &self,
        id: i64,
        draft: &InsurancePensionDraft,
    ) -> Result<(), CoreError> {
        self.insurance.update(id, draft).await
    }

    /// Create an insurance pension together with its first statements.
    /// Not transactional: a statement failure leaves the pension (and
    /// earlier statements) persisted and returns that failure.
    pub async fn create_insurance_pension_with_statements(
        &self,
        draft: &InsurancePensionDraft,
        statements: &[InsuranceStatementDraft],
    ) -> Result<InsurancePension, CoreError> {
        self.insurance.create_with_statements(draft, statements).await
    }

    /// Update an insurance pension and a set of its statements in one
    /// logical step. Same partial-failure behavior as creation.
    pub async fn update_insurance_pension_with_statements(
        &self,
        id: i64,
        draft: &InsurancePensionDraft,
        statements: &[InsuranceStatementUpdate],
    ) -> Result<(), CoreError> {
        self.insurance
            .update_with_statements(id, draft, statements)
            .await
    }

    /// Create a statement under an insurance pension.
    pub async fn create_insurance_statement(
        &self,
        pension_id: i64,
        draft: &InsuranceStatementDraft,
    ) -> Result<InsuranceStatement, CoreError> {
        self.insurance.create_statement(pension_id, draft).await
    }

    /// Update an insurance statement by id.
    pub async fn update_insurance_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
        draft: &InsuranceStatementDraft,
    ) -> Result<(), CoreError> {
        self.insurance
            .update_statement(pension_id, statement_id, draft)
            .await
    }

    /// Delete an insurance statement.
    pub async fn delete_insurance_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
    ) -> Result<(), CoreError> {
        self.insurance
            .delete_statement(pension_id, statement_id)
            .await
    }

    // ── Company pensions ────────────────────────────────────────────

    /// Create a company pension; returns the server-assigned entity.
    pub async fn create_company_pension(
        &self,
        draft: &CompanyPensionDraft,
    ) -> Result<CompanyPension, CoreError> {
        self.company.create(draft).await
    }

    /// Update a company pension body.
    pub async fn update_company_pension(
        &self,
        id: i64,
        draft: &CompanyPensionDraft,
    ) -> Result<(), CoreError> {
        self.company.update(id, draft).await
    }

    /// Create a company pension together with its first statements.
    /// Not transactional: a statement failure leaves the pension (and
    /// earlier statements) persisted and returns that failure.
    pub async fn create_company_pension_with_statements(
        &self,
        draft: &CompanyPensionDraft,
        statements: &[CompanyStatementDraft],
    ) -> Result<CompanyPension, CoreError> {
        self.company.create_with_statements(draft, statements).await
    }

    /// Update a company pension and a set of its statements in one
    /// logical step. Same partial-failure behavior as creation.
    pub async fn update_company_pension_with_statements(
        &self,
        id: i64,
        draft: &CompanyPensionDraft,
        statements: &[CompanyStatementUpdate],
    ) -> Result<(), CoreError> {
        self.company
            .update_with_statements(id, draft, statements)
            .await
    }

    // ── Company statements ──────────────────────────────────────────

    /// Create a statement under a company pension.
    pub async fn create_company_statement(
        &self,
        pension_id: i64,
        draft: &CompanyStatementDraft,
    ) -> Result<CompanyStatement, CoreError> {
        self.company_statements.create(pension_id, draft).await
    }

    /// All statements of a company pension.
    pub async fn company_statements(
        &self,
        pension_id: i64,
    ) -> Result<Vec<CompanyStatement>, CoreError> {
        self.company_statements.list(pension_id).await
    }

    /// The most recent statement of a company pension, if any.
    pub async fn latest_company_statement(
        &self,
        pension_id: i64,
    ) -> Result<Option<CompanyStatement>, CoreError> {
        self.company_statements.latest(pension_id).await
    }

    /// One company statement by id.
    pub async fn company_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
    ) -> Result<CompanyStatement, CoreError> {
        self.company_statements.get(pension_id, statement_id).await
    }

    /// Update a company statement by id.
    pub async fn update_company_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
        draft: &CompanyStatementDraft,
    ) -> Result<(), CoreError> {
        self.company_statements
            .update(pension_id, statement_id, draft)
            .await
    }

    /// Delete a company statement.
    pub async fn delete_company_statement(
        &self,
        pension_id: i64,
        statement_id: i64,
    ) -> Result<(), CoreError> {
        self.company_statements
            .delete(pension_id, statement_id)
            .await
    }

    // ── State pensions ──────────────────────────────────────────────

    /// Create a state pension; returns the server-assigned entity.
    pub async fn create_state_pension(
        &self,
        draft: &StatePensionDraft,
    ) -> Result<StatePension, CoreError> {
        self.state.create(draft).await
    }

    /// Update a state pension.
    pub async fn update_state_pension(
        &self,
        id: i64,
        draft: &StatePensionDraft,
    ) -> Result<(), CoreError> {
        self.state.update(id, draft).await
    }
}
