// ═══════════════════════════════════════════════════════════════════
// Store Tests — PensionStore cache semantics
// ═══════════════════════════════════════════════════════════════════

use serde_json::json;

use pension_planner_core::models::pension::{Pension, PensionKind};
use pension_planner_core::models::statistics::PensionStatistics;
use pension_planner_core::store::PensionStore;

fn etf(id: i64, name: &str) -> Pension {
    serde_json::from_value(json!({
        "type": "ETF_PLAN",
        "id": id,
        "name": name,
        "member_id": 1,
        "etf_id": "IE00B4L5Y983"
    }))
    .unwrap()
}

fn company(id: i64, name: &str) -> Pension {
    serde_json::from_value(json!({
        "type": "COMPANY",
        "id": id,
        "name": name,
        "member_id": 1,
        "employer": "ACME GmbH"
    }))
    .unwrap()
}

fn stats(current: f64) -> PensionStatistics {
    serde_json::from_value(json!({
        "total_invested_amount": 1000.0,
        "current_value": current
    }))
    .unwrap()
}

#[tokio::test]
async fn replace_all_swaps_the_list_and_keeps_selection() {
    let store = PensionStore::new();
    store.replace_all(vec![etf(1, "a"), company(2, "b")]).await;
    store.select(etf(1, "a")).await;

    store.replace_all(vec![company(2, "b")]).await;
    assert_eq!(store.count().await, 1);
    // Single-entity refreshes own the selection; a list swap leaves it.
    assert_eq!(store.selected_id().await, Some(1));
}

#[tokio::test]
async fn upsert_inserts_then_replaces() {
    let store = PensionStore::new();
    store.upsert(etf(1, "old name")).await;
    assert_eq!(store.count().await, 1);

    store.upsert(etf(1, "new name")).await;
    assert_eq!(store.count().await, 1);
    assert_eq!(store.pension(1).await.unwrap().name(), "new name");
}

#[tokio::test]
async fn upsert_syncs_a_matching_selection() {
    let store = PensionStore::new();
    store.upsert(etf(1, "old name")).await;
    store.select(etf(1, "old name")).await;

    store.upsert(etf(1, "new name")).await;
    assert_eq!(store.selected_pension().await.unwrap().name(), "new name");

    // A different id leaves the selection alone.
    store.upsert(company(2, "other")).await;
    assert_eq!(store.selected_id().await, Some(1));
}

#[tokio::test]
async fn remove_clears_entry_selection_and_statistics() {
    let store = PensionStore::new();
    store.upsert(company(2, "b")).await;
    store.select(company(2, "b")).await;
    store.set_statistics(2, stats(500.0)).await;

    store.remove(2).await;
    assert_eq!(store.count().await, 0);
    assert_eq!(store.selected_pension().await, None);
    assert_eq!(store.statistics(2).await, None);
}

#[tokio::test]
async fn remove_of_unselected_pension_keeps_selection() {
    let store = PensionStore::new();
    store.upsert(etf(1, "a")).await;
    store.upsert(company(2, "b")).await;
    store.select(etf(1, "a")).await;

    store.remove(2).await;
    assert_eq!(store.selected_id().await, Some(1));
}

#[tokio::test]
async fn kind_and_handle_resolution_from_cache() {
    let store = PensionStore::new();
    store.upsert(company(7, "b")).await;

    assert_eq!(store.kind_of(7).await, Some(PensionKind::Company));
    let handle = store.handle_of(7).await.unwrap();
    assert_eq!((handle.id, handle.kind), (7, PensionKind::Company));
    assert_eq!(store.kind_of(99).await, None);
    assert_eq!(store.handle_of(99).await, None);
}

#[tokio::test]
async fn statistics_cache_is_per_id() {
    let store = PensionStore::new();
    store.set_statistics(1, stats(100.0)).await;
    store.set_statistics(2, stats(200.0)).await;

    assert_eq!(store.statistics(1).await.unwrap().current_value, 100.0);
    assert_eq!(store.statistics(2).await.unwrap().current_value, 200.0);
    assert_eq!(store.statistics(3).await, None);
}

#[tokio::test]
async fn clear_drops_everything() {
    let store = PensionStore::new();
    store.upsert(etf(1, "a")).await;
    store.select(etf(1, "a")).await;
    store.set_statistics(1, stats(100.0)).await;

    store.clear().await;
    assert_eq!(store.count().await, 0);
    assert_eq!(store.selected_pension().await, None);
    assert_eq!(store.statistics(1).await, None);
}

// A delete followed by a stale fetch's upsert re-inserts the entity.
// Last write wins; the store does not arbitrate between user actions.
#[tokio::test]
async fn stale_upsert_after_remove_reinserts() {
    let store = PensionStore::new();
    store.upsert(etf(1, "a")).await;
    store.remove(1).await;
    assert_eq!(store.count().await, 0);

    store.upsert(etf(1, "a")).await;
    assert_eq!(store.count().await, 1);
}
