//! Owned in-memory cache of server-side pension state.
//!
//! The server is the source of truth; everything here mirrors the last
//! confirmed server response. Mutations happen only through this API,
//! and only after the corresponding request succeeded.

use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::models::pension::{Pension, PensionHandle, PensionKind};
use crate::models::statistics::PensionStatistics;

/// Shared pension cache: the pension list, the current selection, and
/// per-pension statistics with in-flight flags.
///
/// Interior mutability lets one store instance back any number of
/// concurrent operations through `&self`. Concurrent calls for the
/// same id can still interleave logically (a delete followed by a
/// stale fetch re-inserting the entity); last write wins, as it does
/// for any double-submit.
#[derive(Debug, Default)]
pub struct PensionStore {
    state: RwLock<StoreState>,
    statistics: RwLock<HashMap<i64, PensionStatistics>>,
    loading_statistics: RwLock<HashSet<i64>>,
}

#[derive(Debug, Default)]
struct StoreState {
    pensions: Vec<Pension>,
    selected: Option<Pension>,
}

impl PensionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Pension list ────────────────────────────────────────────────

    /// Snapshot of all cached pensions. Order follows the last full
    /// refresh and must not be relied upon.
    pub async fn pensions(&self) -> Vec<Pension> {
        self.state.read().await.pensions.clone()
    }

    /// Look up one cached pension by id.
    pub async fn pension(&self, id: i64) -> Option<Pension> {
        self.state
            .read()
            .await
            .pensions
            .iter()
            .find(|p| p.id() == id)
            .cloned()
    }

    /// Kind of a cached pension, if the cache knows the id.
    pub async fn kind_of(&self, id: i64) -> Option<PensionKind> {
        self.state
            .read()
            .await
            .pensions
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.kind())
    }

    /// Identity handle of a cached pension, if the cache knows the id.
    pub async fn handle_of(&self, id: i64) -> Option<PensionHandle> {
        self.kind_of(id).await.map(|kind| PensionHandle::new(id, kind))
    }

    pub async fn count(&self) -> usize {
        self.state.read().await.pensions.len()
    }

    /// Replace the whole list with a fresh server result.
    /// The selection is left alone; single-entity refreshes own it.
    pub async fn replace_all(&self, pensions: Vec<Pension>) {
        self.state.write().await.pensions = pensions;
    }

    /// Insert a pension or replace the cached entry with the same id.
    /// A matching selection is updated in the same critical section.
    pub async fn upsert(&self, pension: Pension) {
        let mut state = self.state.write().await;
        if let Some(existing) = state.pensions.iter_mut().find(|p| p.id() == pension.id()) {
            *existing = pension.clone();
        } else {
            state.pensions.push(pension.clone());
        }
        if state.selected.as_ref().is_some_and(|s| s.id() == pension.id()) {
            state.selected = Some(pension);
        }
    }

    /// Drop a pension from the cache after the server confirmed its
    /// deletion. Clears a matching selection and any cached statistics.
    pub async fn remove(&self, id: i64) {
        {
            let mut state = self.state.write().await;
            state.pensions.retain(|p| p.id() != id);
            if state.selected.as_ref().is_some_and(|s| s.id() == id) {
                state.selected = None;
            }
        }
        self.statistics.write().await.remove(&id);
        self.loading_statistics.write().await.remove(&id);
    }

    // ── Selection ───────────────────────────────────────────────────

    /// The currently selected pension, if any.
    pub async fn selected_pension(&self) -> Option<Pension> {
        self.state.read().await.selected.clone()
    }

    pub async fn selected_id(&self) -> Option<i64> {
        self.state.read().await.selected.as_ref().map(|p| p.id())
    }

    pub async fn is_selected(&self, id: i64) -> bool {
        self.selected_id().await == Some(id)
    }

    /// Mark a pension as the current selection.
    pub async fn select(&self, pension: Pension) {
        self.state.write().await.selected = Some(pension);
    }

    pub async fn deselect(&self) {
        self.state.write().await.selected = None;
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Cached statistics for a pension, if already fetched.
    pub async fn statistics(&self, id: i64) -> Option<PensionStatistics> {
        self.statistics.read().await.get(&id).cloned()
    }

    pub async fn set_statistics(&self, id: i64, statistics: PensionStatistics) {
        self.statistics.write().await.insert(id, statistics);
    }

    /// True while a statistics request for this id is in flight, so a
    /// list row can show its own spinner without blocking the others.
    pub async fn is_statistics_loading(&self, id: i64) -> bool {
        self.loading_statistics.read().await.contains(&id)
    }

    pub(crate) async fn begin_statistics_load(&self, id: i64) {
        self.loading_statistics.write().await.insert(id);
    }

    pub(crate) async fn finish_statistics_load(&self, id: i64) {
        self.loading_statistics.write().await.remove(&id);
    }

    // ── Maintenance ─────────────────────────────────────────────────

    /// Clear everything, e.g. on logout or household switch.
    pub async fn clear(&self) {
        {
            let mut state = self.state.write().await;
            state.pensions.clear();
            state.selected = None;
        }
        self.statistics.write().await.clear();
        self.loading_statistics.write().await.clear();
    }
}
