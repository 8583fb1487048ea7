//! Kind-spanning pension operations: the fan-out list fetch, the
//! kind-probing single fetch, deletion, statistics, status changes, and
//! the extra-contribution endpoints.

use futures::future::join_all;
use std::sync::Arc;

use super::refresh;
use crate::errors::CoreError;
use crate::models::draft::{ContributionHistoryEntry, OneTimeInvestment};
use crate::models::pension::{Pension, PensionHandle, PensionKind, PensionStatusUpdate};
use crate::models::statistics::PensionStatistics;
use crate::models::summary::{PensionSummary, PensionSummaryRow};
use crate::notify::{notify_err, Notifier};
use crate::store::PensionStore;
use crate::transport::client::ApiClient;

/// Operations shared across all four pension kinds.
#[derive(Clone)]
pub struct PensionOps {
    client: ApiClient,
    store: Arc<PensionStore>,
    notifier: Arc<dyn Notifier>,
}

impl PensionOps {
    pub fn new(client: ApiClient, store: Arc<PensionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            store,
            notifier,
        }
    }

    // ── List fetches ────────────────────────────────────────────────

    /// Fetch all pensions across the four kinds in parallel, merge, and
    /// replace the cached list. Merge order is not guaranteed. ETF rows
    /// are enriched with catalog metadata where the lookup succeeds.
    pub async fn fetch_pensions(
        &self,
        member_id: Option<i64>,
    ) -> Result<Vec<Pension>, CoreError> {
        let result = refresh::fetch_all(&self.client, member_id).await;
        let pensions = notify_err(self.notifier.as_ref(), "Failed to load pensions", result)?;
        self.store.replace_all(pensions.clone()).await;
        Ok(pensions)
    }

    /// Lightweight list rows from the summary endpoints, merged across
    /// kinds. Does not touch the pension cache: summaries are not full
    /// entities.
    pub async fn fetch_pension_summaries(
        &self,
        member_id: Option<i64>,
    ) -> Result<Vec<PensionSummary>, CoreError> {
        let result = self.try_fetch_summaries(member_id).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to load pension summaries",
            result,
        )
    }

    async fn try_fetch_summaries(
        &self,
        member_id: Option<i64>,
    ) -> Result<Vec<PensionSummary>, CoreError> {
        let fetches = PensionKind::ALL.into_iter().map(|kind| {
            let path = match member_id {
                Some(id) => format!("/pension-summaries/{}?member_id={id}", kind.path_segment()),
                None => format!("/pension-summaries/{}", kind.path_segment()),
            };
            async move {
                let rows: Vec<PensionSummaryRow> = self.client.get(&path).await?;
                Ok::<_, CoreError>(rows.into_iter().map(|r| r.tagged(kind)).collect::<Vec<_>>())
            }
        });
        let mut summaries = Vec::new();
        for result in join_all(fetches).await {
            summaries.extend(result?);
        }
        Ok(summaries)
    }

    // ── Single fetch ────────────────────────────────────────────────

    /// Fetch one pension. With a known kind this is a single request;
    /// without one, the kind endpoints are probed sequentially in the
    /// fixed order Etf, Insurance, Company, State, stopping at the
    /// first success. When every probe misses, the last probe's error
    /// is returned. The fetched entity is upserted into the list cache
    /// and becomes the current selection.
    pub async fn fetch_pension(
        &self,
        id: i64,
        kind: Option<PensionKind>,
    ) -> Result<Pension, CoreError> {
        let result = self.try_fetch_pension(id, kind).await;
        notify_err(self.notifier.as_ref(), "Failed to load pension", result)
    }

    async fn try_fetch_pension(
        &self,
        id: i64,
        kind: Option<PensionKind>,
    ) -> Result<Pension, CoreError> {
        let pension = match kind {
            Some(kind) => {
                refresh::fetch_one(&self.client, &PensionHandle::new(id, kind)).await?
            }
            None => self.probe_pension(id).await?,
        };
        self.store.upsert(pension.clone()).await;
        self.store.select(pension.clone()).await;
        Ok(pension)
    }

    async fn probe_pension(&self, id: i64) -> Result<Pension, CoreError> {
        let mut last_error = None;
        for kind in PensionKind::ALL {
            match refresh::fetch_one(&self.client, &PensionHandle::new(id, kind)).await {
                Ok(pension) => return Ok(pension),
                Err(e) => {
                    log::debug!("pension {id} not found as {kind}: {e}");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(CoreError::PensionNotFound(id)))
    }

    // ── Deletion ────────────────────────────────────────────────────

    /// Delete a pension by its identity handle. The cache entry (list,
    /// selection, statistics) is dropped only after the server confirms.
    pub async fn delete_pension(&self, handle: &PensionHandle) -> Result<(), CoreError> {
        let result = self.try_delete(handle).await;
        notify_err(self.notifier.as_ref(), "Failed to delete pension", result)
    }

    async fn try_delete(&self, handle: &PensionHandle) -> Result<(), CoreError> {
        self.client.delete(&refresh::entity_path(handle)).await?;
        self.store.remove(handle.id).await;
        Ok(())
    }

    /// Delete a pension resolving its kind from the local cache. Fails
    /// with a local not-found error, before any request goes out, when
    /// the cache does not know the id — a stale cache makes this path
    /// fail even though the server-side entity may exist. Prefer
    /// [`delete_pension`](Self::delete_pension) with a handle captured
    /// at load time.
    pub async fn delete_pension_by_id(&self, id: i64) -> Result<(), CoreError> {
        let result = match self.store.handle_of(id).await {
            Some(handle) => self.try_delete(&handle).await,
            None => Err(CoreError::PensionNotFound(id)),
        };
        notify_err(self.notifier.as_ref(), "Failed to delete pension", result)
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Fetch server-computed statistics for one pension and cache them
    /// per id. The kind comes from the argument or, failing that, from
    /// the cache — no probing here; an unresolvable kind is a local
    /// not-found error raised before any request. The per-id loading
    /// flag is set for the duration of the request and cleared on both
    /// success and failure.
    pub async fn fetch_statistics(
        &self,
        id: i64,
        kind: Option<PensionKind>,
    ) -> Result<PensionStatistics, CoreError> {
        let result = self.try_fetch_statistics(id, kind).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to load pension statistics",
            result,
        )
    }

    async fn try_fetch_statistics(
        &self,
        id: i64,
        kind: Option<PensionKind>,
    ) -> Result<PensionStatistics, CoreError> {
        let kind = match kind {
            Some(kind) => kind,
            None => self
                .store
                .kind_of(id)
                .await
                .ok_or(CoreError::PensionNotFound(id))?,
        };
        let path = format!("/pensions/{}/{id}/statistics", kind.path_segment());

        self.store.begin_statistics_load(id).await;
        let result = self.client.get::<PensionStatistics>(&path).await;
        self.store.finish_statistics_load(id).await;

        let statistics = result?;
        self.store.set_statistics(id, statistics.clone()).await;
        Ok(statistics)
    }

    // ── Status & contributions ──────────────────────────────────────

    /// Pause or resume a pension through the status-only endpoint, so
    /// the whole entity is never resent. Refreshes the single pension
    /// on success.
    pub async fn update_status(
        &self,
        handle: &PensionHandle,
        update: &PensionStatusUpdate,
    ) -> Result<(), CoreError> {
        let result = self.try_update_status(handle, update).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to update pension status",
            result,
        )
    }

    async fn try_update_status(
        &self,
        handle: &PensionHandle,
        update: &PensionStatusUpdate,
    ) -> Result<(), CoreError> {
        let path = format!("{}/status", refresh::entity_path(handle));
        self.client.put_unit(&path, &update.to_payload()).await?;
        refresh::refresh_one(&self.client, &self.store, handle).await
    }

    /// Record a one-time investment against a pension and refresh it.
    pub async fn add_one_time_investment(
        &self,
        handle: &PensionHandle,
        investment: &OneTimeInvestment,
    ) -> Result<(), CoreError> {
        let result = self.try_one_time_investment(handle, investment).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to add one-time investment",
            result,
        )
    }

    async fn try_one_time_investment(
        &self,
        handle: &PensionHandle,
        investment: &OneTimeInvestment,
    ) -> Result<(), CoreError> {
        let path = format!("{}/one-time-investment", refresh::entity_path(handle));
        self.client.post_unit(&path, &investment.to_payload()).await?;
        refresh::refresh_one(&self.client, &self.store, handle).await
    }

    /// Record a past contribution against a pension and refresh it.
    pub async fn add_contribution_history(
        &self,
        handle: &PensionHandle,
        entry: &ContributionHistoryEntry,
    ) -> Result<(), CoreError> {
        let result = self.try_contribution_history(handle, entry).await;
        notify_err(
            self.notifier.as_ref(),
            "Failed to record contribution",
            result,
        )
    }

    async fn try_contribution_history(
        &self,
        handle: &PensionHandle,
        entry: &ContributionHistoryEntry,
    ) -> Result<(), CoreError> {
        let path = format!("{}/contribution-history", refresh::entity_path(handle));
        self.client.post_unit(&path, &entry.to_payload()).await?;
        refresh::refresh_one(&self.client, &self.store, handle).await
    }
}
