// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire shapes, kind tagging, draft payloads, errors
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use serde_json::json;

use pension_planner_core::errors::CoreError;
use pension_planner_core::models::contribution::{ContributionFrequency, ContributionStepDraft};
use pension_planner_core::models::draft::{CompanyPensionDraft, EtfPensionDraft};
use pension_planner_core::models::pension::{
    Pension, PensionKind, PensionStatus, PensionStatusUpdate,
};
use pension_planner_core::models::statement::{
    CompanyStatementDraft, InsuranceStatementDraft, ProjectionScenario,
    RetirementProjectionDraft,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Kind tagging ────────────────────────────────────────────────────

mod kinds {
    use super::*;

    #[test]
    fn wire_tags_match_the_api_tokens() {
        assert_eq!(serde_json::to_value(PensionKind::Etf).unwrap(), json!("ETF_PLAN"));
        assert_eq!(
            serde_json::to_value(PensionKind::Insurance).unwrap(),
            json!("INSURANCE")
        );
        assert_eq!(
            serde_json::to_value(PensionKind::Company).unwrap(),
            json!("COMPANY")
        );
        assert_eq!(serde_json::to_value(PensionKind::State).unwrap(), json!("STATE"));
    }

    #[test]
    fn path_segments_select_the_endpoint_family() {
        assert_eq!(PensionKind::Etf.path_segment(), "etf");
        assert_eq!(PensionKind::Insurance.path_segment(), "insurance");
        assert_eq!(PensionKind::Company.path_segment(), "company");
        assert_eq!(PensionKind::State.path_segment(), "state");
    }

    #[test]
    fn probe_order_is_fixed() {
        assert_eq!(
            PensionKind::ALL,
            [
                PensionKind::Etf,
                PensionKind::Insurance,
                PensionKind::Company,
                PensionKind::State
            ]
        );
    }

    #[test]
    fn tagged_union_deserializes_by_type_field() {
        let value = json!({
            "type": "COMPANY",
            "id": 7,
            "name": "Workplace plan",
            "member_id": 2,
            "employer": "ACME GmbH"
        });
        let pension: Pension = serde_json::from_value(value).unwrap();
        assert_eq!(pension.kind(), PensionKind::Company);
        assert_eq!(pension.id(), 7);
        assert_eq!(pension.name(), "Workplace plan");
        assert_eq!(pension.status(), PensionStatus::Active);
    }

    // The kind is carried by the enum variant; round-tripping an entity
    // can never change its discriminant.
    #[test]
    fn kind_tag_survives_round_trip() {
        let value = json!({
            "type": "ETF_PLAN",
            "id": 1,
            "name": "World ETF",
            "member_id": 1,
            "etf_id": "IE00B4L5Y983"
        });
        let pension: Pension = serde_json::from_value(value).unwrap();
        let back = serde_json::to_value(&pension).unwrap();
        assert_eq!(back["type"], json!("ETF_PLAN"));
        let again: Pension = serde_json::from_value(back).unwrap();
        assert_eq!(again.kind(), PensionKind::Etf);
    }

    #[test]
    fn handle_captures_id_and_kind() {
        let value = json!({
            "type": "STATE",
            "id": 11,
            "name": "State claim",
            "member_id": 3
        });
        let pension: Pension = serde_json::from_value(value).unwrap();
        let handle = pension.handle();
        assert_eq!(handle.id, 11);
        assert_eq!(handle.kind, PensionKind::State);
    }
}

// ── Draft payloads ──────────────────────────────────────────────────

mod payloads {
    use super::*;

    #[test]
    fn etf_draft_normalizes_dates_and_numbers() {
        let draft = EtfPensionDraft {
            name: "World ETF".into(),
            member_id: "4".into(),
            etf_id: "IE00B4L5Y983".into(),
            existing_units: "10.5".into(),
            reference_date: "2024-01-01".into(),
            contribution_plan_steps: vec![ContributionStepDraft {
                amount: 100.0.into(),
                frequency: ContributionFrequency::Monthly,
                start_date: date(2024, 1, 1).into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let payload = draft.to_payload();

        assert_eq!(payload["member_id"], json!(4));
        assert_eq!(payload["existing_units"].as_f64(), Some(10.5));
        assert_eq!(payload["reference_date"], json!("2024-01-01"));

        let step = &payload["contribution_plan_steps"][0];
        assert_eq!(step["start_date"], json!("2024-01-01"));
        assert!(step["start_date"].is_string());
        assert!(step["amount"].is_number());
        assert_eq!(step["amount"].as_f64(), Some(100.0));
        assert_eq!(step["frequency"], json!("MONTHLY"));
        assert_eq!(step["end_date"], json!(null));
    }

    #[test]
    fn company_draft_carries_no_statements_field() {
        let draft = CompanyPensionDraft {
            name: "Workplace plan".into(),
            member_id: 2.0.into(),
            employer: "ACME GmbH".into(),
            matching_percentage: "50".into(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert!(payload.get("statements").is_none());
        assert_eq!(payload["matching_percentage"].as_f64(), Some(50.0));
        assert_eq!(payload["contribution_frequency"], json!(null));
    }

    #[test]
    fn malformed_draft_input_becomes_null_not_error() {
        let draft = EtfPensionDraft {
            name: "World ETF".into(),
            member_id: "not-a-number".into(),
            etf_id: "IE00B4L5Y983".into(),
            reference_date: "never".into(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload["member_id"], json!(null));
        assert_eq!(payload["reference_date"], json!(null));
    }

    #[test]
    fn company_statement_draft_embeds_projections() {
        let draft = CompanyStatementDraft {
            statement_date: "2024-06-30".into(),
            value: 25000.0.into(),
            retirement_projections: vec![RetirementProjectionDraft {
                retirement_age: 67.0.into(),
                monthly_payout: 800.0.into(),
                total_capital: 240000.0.into(),
            }],
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload["statement_date"], json!("2024-06-30"));
        let projection = &payload["retirement_projections"][0];
        assert_eq!(projection["retirement_age"].as_f64(), Some(67.0));
        assert_eq!(projection["monthly_payout"].as_f64(), Some(800.0));
    }

    #[test]
    fn insurance_statement_scenarios_use_snake_case_tokens() {
        assert_eq!(
            serde_json::to_value(ProjectionScenario::WithContributions).unwrap(),
            json!("with_contributions")
        );
        assert_eq!(
            serde_json::to_value(ProjectionScenario::WithoutContributions).unwrap(),
            json!("without_contributions")
        );
        let draft = InsuranceStatementDraft {
            statement_date: "2024-06-30".into(),
            value: 12000.0.into(),
            costs_percentage: "0.8".into(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload["costs_percentage"].as_f64(), Some(0.8));
        assert_eq!(payload["projections"], json!([]));
    }

    #[test]
    fn status_update_omits_unset_dates() {
        let resume = PensionStatusUpdate::resume().to_payload();
        assert_eq!(resume["status"], json!("ACTIVE"));
        assert!(resume.get("paused_at").is_none());
        assert!(resume.get("resume_at").is_none());

        let pause =
            PensionStatusUpdate::pause(date(2025, 1, 1), Some(date(2025, 6, 1))).to_payload();
        assert_eq!(pause["status"], json!("PAUSED"));
        assert_eq!(pause["paused_at"], json!("2025-01-01"));
        assert_eq!(pause["resume_at"], json!("2025-06-01"));
    }

    #[test]
    fn contribution_frequencies_use_api_tokens() {
        let tokens: Vec<_> = [
            ContributionFrequency::Monthly,
            ContributionFrequency::Quarterly,
            ContributionFrequency::SemiAnnually,
            ContributionFrequency::Annually,
            ContributionFrequency::OneTime,
        ]
        .iter()
        .map(|f| serde_json::to_value(f).unwrap())
        .collect();
        assert_eq!(
            tokens,
            vec![
                json!("MONTHLY"),
                json!("QUARTERLY"),
                json!("SEMI_ANNUALLY"),
                json!("ANNUALLY"),
                json!("ONE_TIME")
            ]
        );
    }
}

// ── Errors ──────────────────────────────────────────────────────────

mod errors {
    use super::*;

    #[test]
    fn api_errors_expose_their_status() {
        let err = CoreError::Api {
            status: 422,
            message: "invalid".into(),
        };
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_not_found());
        assert_eq!(CoreError::PensionNotFound(5).status(), None);
    }

    #[test]
    fn not_found_covers_remote_and_local_misses() {
        assert!(CoreError::Api {
            status: 404,
            message: "gone".into()
        }
        .is_not_found());
        assert!(CoreError::PensionNotFound(1).is_not_found());
        assert!(CoreError::StatementNotFound(1).is_not_found());
        assert!(!CoreError::Network("reset".into()).is_not_found());
    }

    #[test]
    fn serde_errors_convert_to_deserialization() {
        let err: CoreError = serde_json::from_str::<i64>("oops").unwrap_err().into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            CoreError::PensionNotFound(9).to_string(),
            "Pension not found: 9"
        );
        assert!(CoreError::Api {
            status: 500,
            message: "boom".into()
        }
        .to_string()
        .contains("500"));
    }
}
