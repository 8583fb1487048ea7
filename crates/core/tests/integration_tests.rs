// ═══════════════════════════════════════════════════════════════════
// Integration Tests — PensionPlanner facade, end to end against a
// scripted backend
// ═══════════════════════════════════════════════════════════════════

mod common;

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use common::{
    company_pension_json, company_statement_json, etf_pension_json, statistics_json,
    MockTransport, RecordingNotifier,
};
use pension_planner_core::models::draft::{CompanyPensionDraft, EtfPensionDraft};
use pension_planner_core::models::pension::{
    PensionKind, PensionStatus, PensionStatusUpdate,
};
use pension_planner_core::models::statement::CompanyStatementDraft;
use pension_planner_core::notify::NullNotifier;
use pension_planner_core::PensionPlanner;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// A full session: list, create with statements, inspect, pause,
// statistics, delete.
#[tokio::test]
async fn company_pension_lifecycle() {
    let mock = Arc::new(MockTransport::with_empty_lists());
    let planner = PensionPlanner::with_transport(mock.clone(), Arc::new(NullNotifier));

    // Empty household to start with.
    assert!(planner.fetch_pensions(None).await.unwrap().is_empty());

    // Create the pension together with its first statement.
    mock.on("POST", "/pensions/company", company_pension_json(10, "Workplace plan"));
    mock.on(
        "POST",
        "/pensions/company/10/statements",
        company_statement_json(1, "2024-06-30", 25000.0),
    );
    let draft = CompanyPensionDraft {
        name: "Workplace plan".into(),
        member_id: 1.into(),
        employer: "ACME GmbH".into(),
        ..Default::default()
    };
    let statement = CompanyStatementDraft {
        statement_date: "2024-06-30".into(),
        value: 25000.0.into(),
        ..Default::default()
    };
    let created = planner
        .create_company_pension_with_statements(&draft, &[statement])
        .await
        .unwrap();
    assert_eq!(created.id, 10);

    // Load and select it; the detail view drives off the selection.
    mock.on("GET", "/pensions/company/10", company_pension_json(10, "Workplace plan"));
    let pension = planner.fetch_pension(10, Some(PensionKind::Company)).await.unwrap();
    assert_eq!(pension.name(), "Workplace plan");
    assert_eq!(planner.selected_pension().await.unwrap().id(), 10);

    // Pause it; the refreshed entity comes back paused.
    mock.on("PUT", "/pensions/company/10/status", json!(null));
    mock.on(
        "GET",
        "/pensions/company/10",
        json!({
            "id": 10, "name": "Workplace plan", "member_id": 1,
            "employer": "ACME GmbH", "status": "PAUSED", "paused_at": "2025-01-01"
        }),
    );
    let pause = PensionStatusUpdate::pause(date(2025, 1, 1), None);
    planner.update_pension_status(&pension.handle(), &pause).await.unwrap();
    assert_eq!(
        planner.selected_pension().await.unwrap().status(),
        PensionStatus::Paused
    );

    // Statistics resolve the kind from the cache.
    mock.on(
        "GET",
        "/pensions/company/10/statistics",
        statistics_json(24000.0, 25000.0),
    );
    let stats = planner.fetch_statistics(10, None).await.unwrap();
    assert_eq!(stats.current_value, 25000.0);

    // Delete through the handle captured at load time.
    mock.on("DELETE", "/pensions/company/10", json!(null));
    planner.delete_pension(&pension.handle()).await.unwrap();
    assert!(planner.pensions().await.is_empty());
    assert_eq!(planner.selected_pension().await, None);
    assert_eq!(planner.statistics(10).await, None);
}

// An aborted wizard: the create fails, nothing lands in the cache, the
// user sees one notice and the form layer gets the real error back.
#[tokio::test]
async fn failed_create_leaves_no_trace() {
    let mock = Arc::new(MockTransport::new());
    mock.fail("POST", "/pensions/etf", 422);
    let notifier = Arc::new(RecordingNotifier::new());
    let planner = PensionPlanner::with_transport(mock.clone(), notifier.clone());

    let draft = EtfPensionDraft {
        name: "World ETF".into(),
        member_id: 1.into(),
        etf_id: "IE00B4L5Y983".into(),
        ..Default::default()
    };
    let err = planner.create_etf_pension(&draft).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(notifier.messages(), vec!["Failed to create ETF pension"]);
    assert!(planner.pensions().await.is_empty());
}

#[tokio::test]
async fn clear_cache_resets_the_session() {
    let mock = Arc::new(MockTransport::new());
    mock.on("GET", "/pensions/etf", json!([etf_pension_json(1, "World ETF", "IE1")]));
    mock.on("GET", "/pensions/insurance", json!([]));
    mock.on("GET", "/pensions/company", json!([]));
    mock.on("GET", "/pensions/state", json!([]));
    mock.on("GET", "/pensions/etf/1/statistics", statistics_json(100.0, 110.0));
    let planner = PensionPlanner::with_transport(mock.clone(), Arc::new(NullNotifier));

    planner.fetch_pensions(None).await.unwrap();
    planner.fetch_statistics(1, None).await.unwrap();
    assert_eq!(planner.pensions().await.len(), 1);

    planner.clear_cache().await;
    assert!(planner.pensions().await.is_empty());
    assert_eq!(planner.statistics(1).await, None);
    assert_eq!(planner.selected_pension().await, None);
}
